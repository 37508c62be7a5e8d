//! Screen-flow controllers
//!
//! Explicit per-screen state for the two-screen flow: a location form and
//! a weather results screen. Rendering is an external collaborator that
//! consumes this state. Errors stop at this boundary: each one is logged
//! with its cause, mapped to a single user-facing message per category,
//! and the screen returns to an interactive state.

use tracing::error;

use crate::SkyGlanceError;
use crate::api::WeatherApiClient;
use crate::condition::VisualCategory;
use crate::device::DeviceLocationService;
use crate::location_resolver::LocationResolver;
use crate::models::{Coordinates, LocationQuery, WeatherSnapshot};

/// Navigation parameter passed from the form screen to the weather screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeatherTarget {
    /// Show weather for coordinates resolved from typed input
    Coordinates(Coordinates),
    /// Resolve the device's own position first
    CurrentLocation,
}

/// State of the location form screen
///
/// Re-initialized per navigation; nothing survives leaving the screen.
#[derive(Debug, Default)]
pub struct LocationForm {
    /// Country input text
    pub country: String,
    /// State/region input text
    pub state_or_region: String,
    /// True while a resolution request is in flight
    pub busy: bool,
    /// Current user-facing error message, if any
    pub error_message: Option<String>,
}

impl LocationForm {
    /// Create an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form input as a location query
    #[must_use]
    pub fn query(&self) -> LocationQuery {
        LocationQuery::new(self.country.clone(), self.state_or_region.clone())
    }

    /// Submit the form.
    ///
    /// Resolves the typed location and produces the navigation target for
    /// the weather screen, or records the user-facing error message and
    /// stays put.
    pub async fn submit(&mut self, api_client: &WeatherApiClient) -> Option<WeatherTarget> {
        self.busy = true;
        self.error_message = None;

        let result = LocationResolver::resolve(api_client, &self.query()).await;
        self.busy = false;

        match result {
            Ok(coordinates) => Some(WeatherTarget::Coordinates(coordinates)),
            Err(err) => {
                error!("Location resolution failed: {}", err);
                self.error_message = Some(Self::screen_message(&err));
                None
            }
        }
    }

    /// The device pathway skips validation and the search endpoint
    #[must_use]
    pub fn use_current_location(&self) -> WeatherTarget {
        WeatherTarget::CurrentLocation
    }

    fn screen_message(err: &SkyGlanceError) -> String {
        match err {
            SkyGlanceError::Network { .. } => {
                "Failed to fetch location. Please try again.".to_string()
            }
            other => other.user_message(),
        }
    }
}

/// What the weather screen currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherView {
    /// A request is in flight
    Loading,
    /// The pipeline failed; the message is ready for display
    Failed { message: String },
    /// Current conditions and the classified display category
    Ready {
        snapshot: WeatherSnapshot,
        visual: VisualCategory,
    },
}

/// State of the weather results screen
#[derive(Debug)]
pub struct WeatherScreen {
    target: WeatherTarget,
    /// View state consumed by the rendering collaborator
    pub view: WeatherView,
}

impl WeatherScreen {
    /// Create a screen for a navigation target; starts in `Loading`
    #[must_use]
    pub fn new(target: WeatherTarget) -> Self {
        Self {
            target,
            view: WeatherView::Loading,
        }
    }

    /// Run the whole pipeline and update the view.
    ///
    /// Used for the initial load and for Refresh; every invocation starts
    /// from scratch and carries no state from the previous one. A later
    /// call simply overwrites whatever the view held.
    pub async fn refresh(
        &mut self,
        api_client: &WeatherApiClient,
        device: &dyn DeviceLocationService,
    ) {
        self.view = WeatherView::Loading;

        match self.fetch(api_client, device).await {
            Ok((snapshot, visual)) => {
                self.view = WeatherView::Ready { snapshot, visual };
            }
            Err(err) => {
                error!("Weather fetch failed: {}", err);
                self.view = WeatherView::Failed {
                    message: Self::screen_message(&err),
                };
            }
        }
    }

    async fn fetch(
        &self,
        api_client: &WeatherApiClient,
        device: &dyn DeviceLocationService,
    ) -> crate::Result<(WeatherSnapshot, VisualCategory)> {
        let coordinates = match self.target {
            WeatherTarget::Coordinates(coordinates) => coordinates,
            WeatherTarget::CurrentLocation => {
                LocationResolver::resolve_from_device(device).await?
            }
        };

        let snapshot = api_client.fetch_current(&coordinates).await?;
        let visual = VisualCategory::from_condition_text(Some(&snapshot.condition_text));

        Ok((snapshot, visual))
    }

    fn screen_message(err: &SkyGlanceError) -> String {
        match err {
            SkyGlanceError::PermissionDenied { .. } => err.user_message(),
            _ => "Failed to fetch weather data".to_string(),
        }
    }
}
