//! Error types and handling for the `SkyGlance` pipeline

use thiserror::Error;

/// Main error type for the `SkyGlance` pipeline
#[derive(Error, Debug)]
pub enum SkyGlanceError {
    /// Input validation errors (empty form fields)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The search endpoint returned no matching location
    #[error("Location not found: {message}")]
    NotFound { message: String },

    /// The device refused the foreground location permission prompt
    #[error("Location permission denied: {message}")]
    PermissionDenied { message: String },

    /// Transport failures, non-2xx responses and malformed payloads
    #[error("Network error: {message}")]
    Network { message: String },
}

impl SkyGlanceError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new permission-denied error
    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    ///
    /// One fixed message per category. The underlying cause goes to the
    /// diagnostic log, never to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkyGlanceError::Validation { .. } => "Please enter both country and state".to_string(),
            SkyGlanceError::NotFound { .. } => {
                "Location not found. Please try again.".to_string()
            }
            SkyGlanceError::PermissionDenied { .. } => {
                "Permission to access location was denied".to_string()
            }
            SkyGlanceError::Network { .. } => {
                "Unable to connect to the weather service. Please try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for SkyGlanceError {
    fn from(err: reqwest::Error) -> Self {
        SkyGlanceError::Network {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let validation_err = SkyGlanceError::validation("country is empty");
        assert!(matches!(validation_err, SkyGlanceError::Validation { .. }));

        let not_found_err = SkyGlanceError::not_found("no match for 'Atlantis'");
        assert!(matches!(not_found_err, SkyGlanceError::NotFound { .. }));

        let permission_err = SkyGlanceError::permission_denied("prompt refused");
        assert!(matches!(
            permission_err,
            SkyGlanceError::PermissionDenied { .. }
        ));

        let network_err = SkyGlanceError::network("connection reset");
        assert!(matches!(network_err, SkyGlanceError::Network { .. }));
    }

    #[test]
    fn test_user_messages() {
        let validation_err = SkyGlanceError::validation("test");
        assert_eq!(
            validation_err.user_message(),
            "Please enter both country and state"
        );

        let not_found_err = SkyGlanceError::not_found("test");
        assert!(not_found_err.user_message().contains("Location not found"));

        let permission_err = SkyGlanceError::permission_denied("test");
        assert!(permission_err.user_message().contains("denied"));

        let network_err = SkyGlanceError::network("test");
        assert!(network_err.user_message().contains("try again"));
    }

    #[test]
    fn test_cause_is_not_shown_to_user() {
        let err = SkyGlanceError::network("tcp connect error: 10.0.0.1:443");
        assert!(!err.user_message().contains("10.0.0.1"));
        assert!(err.to_string().contains("10.0.0.1"));
    }
}
