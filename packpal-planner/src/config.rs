//! Configuration loading for the PackPal planner.
//!
//! The `[weather]` and `[storage]` sections are required. `[logging]` falls
//! back to an `info` filter with plain-text output.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "PACKPAL_CONFIG";

/// Upper bound accepted by the forecast endpoint.
pub const MAX_FORECAST_DAYS: u8 = 14;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    pub weather: WeatherConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
    pub forecast_days: u8,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub saved_trips_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or PACKPAL_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl PlannerConfig {
    /// Load from an explicit path, or from `PACKPAL_CONFIG` when none is given.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(config_path_from_env)
            .ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded planner configuration");
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "weather.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "weather.base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.weather.api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "weather.api_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.weather.forecast_days == 0 || self.weather.forecast_days > MAX_FORECAST_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "weather.forecast_days",
                reason: format!("must be between 1 and {}", MAX_FORECAST_DAYS),
            });
        }
        if self.weather.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "weather.request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.storage.saved_trips_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.saved_trips_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.filter",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from)
}
