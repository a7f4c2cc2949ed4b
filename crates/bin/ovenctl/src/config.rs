//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ovenctl.toml` in the working directory unless a path is given.
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values.

use std::path::Path;
use std::time::Duration;

use ovenpanel_adapter_http_reqwest::DeviceConfig;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "ovenctl.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device connection settings.
    pub device: DeviceConfig,
    /// Status poller settings.
    pub poller: PollerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Status poller configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Milliseconds between two `/get_state` requests.
    pub period_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `ovenctl.toml` if present), apply
    /// environment-variable overrides, then the `--base-url` flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicitly given file
    /// cannot be read, or if the resulting values are invalid.
    pub fn load(path: Option<&Path>, base_url: Option<String>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::from_optional_file(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        config.resolve(|key| std::env::var(key).ok(), base_url)
    }

    /// Layer overrides on top of file values and validate the result.
    ///
    /// Precedence, lowest first: file, environment, `base_url` flag.
    fn resolve(
        mut self,
        var: impl Fn(&str) -> Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        self.apply_env_overrides(var);
        if let Some(base_url) = base_url {
            self.device.base_url = base_url;
        }
        self.validate()?;
        Ok(self)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_path(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("OVENCTL_BASE_URL") {
            self.device.base_url = val;
        }
        if let Some(val) = var("OVENCTL_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.device.timeout_ms = ms;
            }
        }
        if let Some(val) = var("OVENCTL_POLL_PERIOD_MS") {
            if let Ok(ms) = val.parse() {
                self.poller.period_ms = ms;
            }
        }
        if let Some(val) = var("OVENCTL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first invalid value.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.poller.period_ms == 0 {
            return Err(ConfigError::Validation(
                "poller.period_ms must be non-zero".to_string(),
            ));
        }
        if self.device.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "device.timeout_ms must be non-zero".to_string(),
            ));
        }
        let url = self.device.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "device.base_url must start with http:// or https://, got {url:?}"
            )));
        }
        Ok(())
    }

    /// Period between two status requests.
    #[must_use]
    pub fn poll_period(&self) -> Duration {
        Duration::from_millis(self.poller.period_ms)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { period_ms: 1_000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ovenctl=info,ovenpanel_app=info,ovenpanel_adapter_http_reqwest=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
