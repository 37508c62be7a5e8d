//! Data models shared across the pipeline

pub mod location;
pub mod weather;

pub use location::{Coordinates, LocationQuery};
pub use weather::WeatherSnapshot;
