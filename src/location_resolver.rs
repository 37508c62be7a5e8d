//! Location Resolution Module
//!
//! This module handles resolving location inputs (typed country/state
//! form input, or the device's own position) into coordinates for the
//! forecast endpoint.

use tracing::debug;

use crate::api::WeatherApiClient;
use crate::device::{DeviceLocationService, PermissionStatus};
use crate::models::{Coordinates, LocationQuery};
use crate::{Result, SkyGlanceError};

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve typed country/state input into coordinates.
    ///
    /// Validates the query before any network call, then takes the first
    /// candidate in provider order. No ranking or disambiguation is
    /// applied beyond that order.
    pub async fn resolve(
        api_client: &WeatherApiClient,
        query: &LocationQuery,
    ) -> Result<Coordinates> {
        query.validate()?;

        let term = query.search_term();
        debug!("Resolving location query: {}", term);

        let candidates = api_client.search_locations(&term).await?;
        let Some(first) = candidates.into_iter().next() else {
            return Err(SkyGlanceError::not_found(format!(
                "no location matches '{term}'"
            )));
        };

        debug!(
            "Resolved '{}' to {} at ({}, {})",
            term, first.name, first.coordinates.latitude, first.coordinates.longitude
        );

        Ok(first.coordinates)
    }

    /// Resolve coordinates from the device location service.
    ///
    /// Asks for foreground permission first; a refusal short-circuits
    /// without reading the position. The search endpoint is never called
    /// on this path.
    pub async fn resolve_from_device(
        service: &dyn DeviceLocationService,
    ) -> Result<Coordinates> {
        match service.request_permission().await {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied => {
                return Err(SkyGlanceError::permission_denied(
                    "foreground location permission was refused",
                ));
            }
        }

        let position = service.current_position().await?;
        debug!("Device reported position {}", position.format_coordinates());

        Ok(position)
    }
}
