//! Device location service seam
//!
//! The platform capability behind the "use my current location" pathway:
//! a foreground permission prompt followed by a position read. Embedding
//! applications supply the real platform backend; desktop hosts and tests
//! can use [`FixedPositionSource`].

use async_trait::async_trait;

use crate::Result;
use crate::models::Coordinates;

/// Outcome of the foreground permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Platform location capability
#[async_trait]
pub trait DeviceLocationService: Send + Sync {
    /// Prompt for foreground location permission
    async fn request_permission(&self) -> PermissionStatus;

    /// Read the device's current position
    async fn current_position(&self) -> Result<Coordinates>;
}

/// Location source that reports a fixed position and always grants
/// permission. Stands in for a platform backend where none exists.
#[derive(Debug, Clone)]
pub struct FixedPositionSource {
    position: Coordinates,
}

impl FixedPositionSource {
    /// Create a source that always reports `position`
    #[must_use]
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

#[async_trait]
impl DeviceLocationService for FixedPositionSource {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.position)
    }
}
