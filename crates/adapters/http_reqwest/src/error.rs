//! HTTP adapter error types.

/// Errors raised while building the HTTP client.
///
/// Request failures are not reported here; they surface as
/// [`PanelError`](ovenpanel_domain::error::PanelError) through the port.
#[derive(Debug, thiserror::Error)]
pub enum HttpAdapterError {
    /// The configured base URL is empty or not `http(s)://`.
    #[error("invalid device base url {0:?}")]
    InvalidBaseUrl(String),

    /// `reqwest` could not build the client (TLS backend, timeouts, …).
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_base_url() {
        let err = HttpAdapterError::InvalidBaseUrl("ftp://oven".to_string());
        assert_eq!(err.to_string(), "invalid device base url \"ftp://oven\"");
    }
}
