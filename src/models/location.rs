//! Location input and coordinate models

use serde::{Deserialize, Serialize};

use crate::error::SkyGlanceError;

/// Free-text location input collected by the form screen
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// Country name as typed by the user
    pub country: String,
    /// State or region name as typed by the user
    pub state_or_region: String,
}

impl LocationQuery {
    /// Create a new query from form input
    #[must_use]
    pub fn new(country: impl Into<String>, state_or_region: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            state_or_region: state_or_region.into(),
        }
    }

    /// Check that both fields are present.
    ///
    /// Runs before any network call; whitespace-only input counts as empty.
    pub fn validate(&self) -> Result<(), SkyGlanceError> {
        if self.country.trim().is_empty() || self.state_or_region.trim().is_empty() {
            return Err(SkyGlanceError::validation(
                "country and state/region are both required",
            ));
        }
        Ok(())
    }

    /// Combined search term in provider order: "state,country"
    #[must_use]
    pub fn search_term(&self) -> String {
        format!(
            "{},{}",
            self.state_or_region.trim(),
            self.country.trim()
        )
    }
}

/// Geographic coordinates
///
/// Immutable once produced, whether from the search endpoint or the
/// device location service.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as the "lat,lon" forecast query parameter
    #[must_use]
    pub fn as_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Format coordinates for display and logging
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
