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

    #[error("No API key configured: set `generation.api_key` or the {env_var} environment variable")]
    MissingCredential { env_var: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pdfstudy/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pdfstudy").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
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
        let generation = &self.generation;
        if generation.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "generation.base_url must not be empty".to_string(),
            });
        }
        if generation.model.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "generation.model must not be empty".to_string(),
            });
        }
        if generation.api_key_env.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "generation.api_key_env must not be empty".to_string(),
            });
        }
        if generation.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "generation.timeout_seconds must be greater than zero".to_string(),
            });
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let mut config = Config::default();
        config.ui.tick_rate_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn empty_model_is_rejected() {
        let mut config = Config::default();
        config.generation.model = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("generation.model"));
    }
}
