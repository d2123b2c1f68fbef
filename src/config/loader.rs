use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::config::types::Config;
use crate::ui::auto_refresh::AutoRefreshStatus;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/dash-refresh/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("dash-refresh").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using built-in defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;

        info!(
            path = %path.display(),
            status = %config.auto_refresh.status,
            interval = config.auto_refresh.interval,
            "Loaded config"
        );
        Ok(config)
    }

    /// Applies command-line overrides to the defaults, then validates.
    pub fn with_overrides(
        mut self,
        status: Option<AutoRefreshStatus>,
        interval: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(status) = status {
            self.auto_refresh.status = status;
        }
        if let Some(interval) = interval {
            self.auto_refresh.interval = interval;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The default interval is a finite, non-negative number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interval = self.auto_refresh.interval;
        if !interval.is_finite() {
            return Err(ConfigError::ValidationError {
                message: format!("Default auto-refresh interval must be finite, got {}", interval),
            });
        }
        if interval < 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!("Default auto-refresh interval must not be negative, got {}", interval),
            });
        }

        Ok(())
    }
}
