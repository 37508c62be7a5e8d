//! Current-conditions snapshot model

use serde::{Deserialize, Serialize};

/// Current weather for a resolved location
///
/// Values are passed through in the provider's native units
/// (Celsius, km/h, millibars); nothing is computed or cached locally.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Place name reported by the provider
    pub location_name: String,
    /// Administrative region
    pub region: String,
    /// Country name
    pub country: String,
    /// Temperature in Celsius
    pub temperature_c: f32,
    /// Apparent temperature in Celsius
    pub feels_like_c: f32,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// Wind speed in km/h
    pub wind_kph: f32,
    /// Atmospheric pressure in millibars
    pub pressure_mb: f32,
    /// Free-text condition description (e.g. "Partly cloudy")
    pub condition_text: String,
}

impl WeatherSnapshot {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_c)
    }

    /// Format apparent temperature with unit
    #[must_use]
    pub fn format_feels_like(&self) -> String {
        format!("{:.1}°C", self.feels_like_c)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} km/h", self.wind_kph)
    }

    /// Format atmospheric pressure with unit
    #[must_use]
    pub fn format_pressure(&self) -> String {
        format!("{:.1} mb", self.pressure_mb)
    }

    /// Format the place heading, skipping segments the provider left blank
    #[must_use]
    pub fn format_location(&self) -> String {
        [
            self.location_name.as_str(),
            self.region.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Hobart".to_string(),
            region: "Tasmania".to_string(),
            country: "Australia".to_string(),
            temperature_c: 11.0,
            feels_like_c: 9.4,
            humidity_pct: 71,
            wind_kph: 20.9,
            pressure_mb: 1017.0,
            condition_text: "Partly cloudy".to_string(),
        }
    }

    #[test]
    fn test_format_helpers() {
        let snapshot = snapshot();
        assert_eq!(snapshot.format_temperature(), "11.0°C");
        assert_eq!(snapshot.format_feels_like(), "9.4°C");
        assert_eq!(snapshot.format_wind(), "20.9 km/h");
        assert_eq!(snapshot.format_pressure(), "1017.0 mb");
    }

    #[test]
    fn test_format_location_joins_segments() {
        let snapshot = snapshot();
        assert_eq!(snapshot.format_location(), "Hobart, Tasmania, Australia");
    }

    #[test]
    fn test_format_location_skips_blank_region() {
        let mut snapshot = snapshot();
        snapshot.region = String::new();
        assert_eq!(snapshot.format_location(), "Hobart, Australia");
    }
}
