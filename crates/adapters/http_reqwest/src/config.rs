//! Device connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the device lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the device's web server (e.g. `http://192.168.2.1`).
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl DeviceConfig {
    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            // Address of the oven's own access point.
            base_url: "http://192.168.2.1".to_string(),
            timeout_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = DeviceConfig::default();
        assert_eq!(config.base_url, "http://192.168.2.1");
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            base_url = "http://oven.local:8080"
            timeout_ms = 500
        "#;
        let config: DeviceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "http://oven.local:8080");
        assert_eq!(config.timeout_ms, 500);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: DeviceConfig = toml::from_str("timeout_ms = 100").unwrap();
        assert_eq!(config.base_url, "http://192.168.2.1");
        assert_eq!(config.timeout_ms, 100);
    }
}
