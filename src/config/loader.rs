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

    #[error("Failed to build HTTP client: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/consulta-precio/config.toml` on Linux, the platform
    /// equivalent elsewhere, or the current directory as a last resort.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("consulta-precio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`; a present file must parse
    /// and validate.
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
        let base_url = self.pricing.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "pricing.base_url must be an http(s) URL, got '{}'",
                self.pricing.base_url
            )));
        }

        if self.pricing.tax_id.trim().is_empty() {
            return Err(invalid("pricing.tax_id must not be empty"));
        }

        if self.pricing.timeout_seconds == 0 {
            return Err(invalid("pricing.timeout_seconds must be greater than zero"));
        }

        if self.pricing.connect_timeout_seconds == 0 {
            return Err(invalid(
                "pricing.connect_timeout_seconds must be greater than zero",
            ));
        }

        if self.display.dwell_seconds == 0 {
            return Err(invalid("display.dwell_seconds must be greater than zero"));
        }

        if self.speech.enabled && self.speech.command.trim().is_empty() {
            return Err(invalid("speech.command must be set when speech is enabled"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
