use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/product-form/config.toml` on Unix/macOS,
    /// or the equivalent via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("product-form").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML.
    ///
    /// Call `validate` once command-line overrides have been applied.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
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

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `service.base_url` is an http(s) URL
    /// - `service.path` is absolute
    /// - timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let service = &self.service;

        if !(service.base_url.starts_with("http://") || service.base_url.starts_with("https://"))
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "service.base_url '{}' must start with http:// or https://",
                    service.base_url
                ),
            });
        }

        if !service.path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("service.path '{}' must start with '/'", service.path),
            });
        }

        if service.timeout_seconds == 0 || service.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "service timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
