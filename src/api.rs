//! Weather API client for `WeatherAPI.com` integration
//!
//! HTTP client functionality for the location-search and forecast
//! endpoints. Provider wire formats stay private to this module so the
//! external API can be swapped without touching resolution, classification
//! or display logic.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::WeatherConfig;
use crate::models::{Coordinates, WeatherSnapshot};
use crate::{Result, SkyGlanceError};

const USER_AGENT: &str = "SkyGlance/0.1.0";

/// HTTP client for the weather provider
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: WeatherConfig,
}

/// A single candidate returned by the location-search endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCandidate {
    /// Location name
    pub name: String,
    /// Administrative region
    pub region: String,
    /// Country name
    pub country: String,
    /// Resolved coordinates
    pub coordinates: Coordinates,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                SkyGlanceError::network(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Search the provider for locations matching a free-text term.
    ///
    /// Candidates come back in provider order; callers that want a single
    /// result take the first element.
    pub async fn search_locations(&self, term: &str) -> Result<Vec<LocationCandidate>> {
        info!("Searching locations for '{}'", term);

        let url = format!(
            "{}/search.json?key={}&q={}",
            self.config.base_url,
            self.config.api_key,
            urlencoding::encode(term)
        );

        let response = self.send(&url).await?;

        let hits: Vec<wire::SearchHit> = response.json().await.map_err(|e| {
            warn!("Failed to parse location search response: {}", e);
            SkyGlanceError::network("Invalid location data received from weather API")
        })?;

        debug!("Location search for '{}' returned {} candidates", term, hits.len());

        Ok(hits.into_iter().map(LocationCandidate::from).collect())
    }

    /// Fetch current conditions for a coordinate pair.
    ///
    /// Requests a one-day window with no air-quality or alert data. The
    /// response must carry both a `location` and a `current` section; a
    /// partial snapshot is never produced. Side-effect-free beyond the
    /// network call, so Refresh can call it repeatedly.
    pub async fn fetch_current(&self, coords: &Coordinates) -> Result<WeatherSnapshot> {
        info!(
            "Fetching current weather for {}",
            coords.format_coordinates()
        );

        let url = format!(
            "{}/forecast.json?key={}&q={}&days=1&aqi=no&alerts=no",
            self.config.base_url,
            self.config.api_key,
            coords.as_query()
        );

        let response = self.send(&url).await?;

        let forecast: wire::ForecastResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse forecast response: {}", e);
            SkyGlanceError::network("Invalid weather data received from weather API")
        })?;

        let Some(current) = forecast.current else {
            warn!("Forecast response is missing the current conditions section");
            return Err(SkyGlanceError::network(
                "Forecast response is missing the current conditions section",
            ));
        };
        let location = forecast.location;

        Ok(WeatherSnapshot {
            location_name: location.name,
            region: location.region,
            country: location.country,
            temperature_c: current.temp_c,
            feels_like_c: current.feelslike_c,
            humidity_pct: current.humidity,
            wind_kph: current.wind_kph,
            pressure_mb: current.pressure_mb,
            condition_text: current.condition.text,
        })
    }

    /// Issue a GET request, folding transport failures and non-2xx
    /// statuses into the network error category.
    async fn send(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Weather API request failed: {}", e);
            SkyGlanceError::network(format!("Request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Weather API returned status {}", status);
            return Err(SkyGlanceError::network(format!(
                "Weather API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        Ok(response)
    }
}

/// `WeatherAPI.com` wire formats and conversions
mod wire {
    use serde::Deserialize;

    use super::LocationCandidate;
    use crate::models::Coordinates;

    /// Entry in the search.json response array
    #[derive(Debug, Deserialize)]
    pub struct SearchHit {
        pub name: String,
        #[serde(default)]
        pub region: String,
        #[serde(default)]
        pub country: String,
        pub lat: f64,
        pub lon: f64,
    }

    impl From<SearchHit> for LocationCandidate {
        fn from(hit: SearchHit) -> Self {
            Self {
                name: hit.name,
                region: hit.region,
                country: hit.country,
                coordinates: Coordinates::new(hit.lat, hit.lon),
            }
        }
    }

    /// forecast.json response, reduced to the sections the snapshot needs
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub location: LocationSection,
        pub current: Option<CurrentSection>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LocationSection {
        pub name: String,
        #[serde(default)]
        pub region: String,
        #[serde(default)]
        pub country: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentSection {
        pub temp_c: f32,
        pub feelslike_c: f32,
        pub humidity: u8,
        pub wind_kph: f32,
        pub pressure_mb: f32,
        pub condition: ConditionSection,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionSection {
        pub text: String,
    }
}
