//! Client settings
//!
//! Everything the client can be configured with, loadable from a TOML file:
//!
//! ```toml
//! [api]
//! base_url = "https://api.ssllabs.com/api/v3"
//! timeout_secs = 10
//! retries = 5
//! poll_interval_secs = 2
//! error_status_policy = "stop_polling"
//! verbosity = 0
//! ```

use crate::client::{
    ClientConfig, ErrorStatusPolicy, DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL, DEFAULT_RETRIES,
    DEFAULT_TIMEOUT,
};
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// API connection settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub retries: u32,
    pub poll_interval_secs: u64,
    pub error_status_policy: ErrorStatusPolicy,
    pub verbosity: u8,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            retries: DEFAULT_RETRIES,
            poll_interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
            error_status_policy: ErrorStatusPolicy::default(),
            verbosity: 0,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
}

impl Settings {
    /// Load settings from the default config file, or defaults if it is absent
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.verbosity > 2 {
            return Err(ConfigError::InvalidValue {
                key: "api.verbosity".to_string(),
                message: format!("expected 0, 1 or 2, got {}", self.api.verbosity),
            });
        }
        let base = self.api.base_url.trim();
        if !base.is_empty() && !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url".to_string(),
                message: format!("not an http(s) URL: {}", base),
            });
        }
        Ok(())
    }

    /// Client configuration described by these settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            verbosity: self.api.verbosity,
            timeout: self.api.timeout(),
            retries: self.api.retries,
            poll_interval: self.api.poll_interval(),
            error_policy: self.api.error_status_policy,
        }
    }
}

impl From<&Settings> for ClientConfig {
    fn from(settings: &Settings) -> Self {
        settings.client_config()
    }
}
