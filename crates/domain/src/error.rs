//! Error taxonomy shared by every panel host.
//!
//! Three failure classes exist: the request never completed (transport), the
//! device answered with a non-success status, or the body could not be
//! decoded. None of them is fatal; callers log and move on.

use crate::endpoint::Endpoint;

/// Boxed source error carried by [`PanelError`] variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single request against the device.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Network or transport failure; no response was received.
    #[error("request {endpoint} failed")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: BoxError,
    },

    /// The device answered with a non-success HTTP status.
    #[error("request {endpoint} answered with HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// The response body could not be read or decoded.
    #[error("failed to decode response of {endpoint}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: BoxError,
    },
}

impl PanelError {
    /// Build a [`PanelError::Transport`] from any error-like source.
    pub fn transport(endpoint: Endpoint, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            endpoint,
            source: source.into(),
        }
    }

    /// Build a [`PanelError::Decode`] from any error-like source.
    pub fn decode(endpoint: Endpoint, source: impl Into<BoxError>) -> Self {
        Self::Decode {
            endpoint,
            source: source.into(),
        }
    }

    /// Endpoint of the request that failed.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }

    /// HTTP status, when the device did answer.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Map an HTTP status code to `Ok(())` for 2xx and [`PanelError::Status`] otherwise.
///
/// # Errors
///
/// Returns [`PanelError::Status`] for any status outside `200..=299`.
pub fn check_status(endpoint: Endpoint, status: u16) -> Result<(), PanelError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(PanelError::Status { endpoint, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn should_accept_success_statuses() {
        assert!(check_status(Endpoint::Increment, 200).is_ok());
        assert!(check_status(Endpoint::Increment, 204).is_ok());
        assert!(check_status(Endpoint::Increment, 299).is_ok());
    }

    #[test]
    fn should_reject_non_success_statuses() {
        let err = check_status(Endpoint::GetState, 500).unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.endpoint(), Endpoint::GetState);

        assert!(check_status(Endpoint::GetState, 302).is_err());
        assert!(check_status(Endpoint::GetState, 404).is_err());
    }

    #[test]
    fn should_display_status_error() {
        let err = PanelError::Status {
            endpoint: Endpoint::GetState,
            status: 500,
        };
        assert_eq!(err.to_string(), "request GET /get_state answered with HTTP 500");
    }

    #[test]
    fn should_keep_source_of_decode_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err = PanelError::decode(Endpoint::GetState, json_err);
        assert_eq!(err.to_string(), "failed to decode response of GET /get_state");
        assert!(err.source().is_some());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn should_wrap_plain_message_as_transport_source() {
        let err = PanelError::transport(Endpoint::Increment, "connection refused");
        assert_eq!(err.to_string(), "request GET /increment failed");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("connection refused")
        );
    }
}
