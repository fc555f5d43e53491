use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::{Config, SourceKind};

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
    /// Uses `~/.config/kawi/config.toml` on Unix/macOS, or equivalent
    /// elsewhere via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("kawi").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; a present file is
    /// parsed as TOML and validated.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
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
    ///
    /// Checks:
    /// - The default source name is a known source kind
    /// - The remote model identifier is non-empty
    /// - The history limit is at least 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if SourceKind::parse(&self.defaults.source).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Unknown source '{}', expected 'mock' or 'remote'",
                    self.defaults.source
                ),
            });
        }

        if self.remote.model.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Remote model must not be empty".to_string(),
            });
        }

        if self.defaults.history_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "History limit must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
