//! `SkyGlance` - two-screen weather client core
//!
//! This library provides the pipeline behind a minimal mobile weather
//! client: free-text location search, a device-position pathway,
//! current-conditions fetching, and classification of condition text into
//! display categories, plus the per-screen controllers that tie them
//! together.

pub mod api;
pub mod condition;
pub mod config;
pub mod device;
pub mod error;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod screen;

// Re-export core types for public API
pub use api::{LocationCandidate, WeatherApiClient};
pub use condition::VisualCategory;
pub use config::{LoggingConfig, SkyGlanceConfig, WeatherConfig};
pub use device::{DeviceLocationService, FixedPositionSource, PermissionStatus};
pub use error::SkyGlanceError;
pub use location_resolver::LocationResolver;
pub use models::{Coordinates, LocationQuery, WeatherSnapshot};
pub use screen::{LocationForm, WeatherScreen, WeatherTarget, WeatherView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkyGlanceError>;
