use std::collections::HashSet;
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
    /// `healthhub/config.toml` under `dirs::config_dir()`, or the current
    /// directory when no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("healthhub").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. Otherwise the file is
    /// parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation.bus_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "navigation.bus_capacity must be greater than zero".to_string(),
            });
        }

        if self.invitation.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "invitation.timeout_seconds must be greater than zero".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for device in &self.devices {
            if device.address.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Device address must not be empty".to_string(),
                });
            }
            if !seen.insert(device.address.trim().to_ascii_uppercase()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate device address '{}'", device.address),
                });
            }
        }

        Ok(())
    }
}
