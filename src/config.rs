//! Configuration management for jisho-anki.
//!
//! Defaults are overridden by a TOML file in the platform config directory,
//! which is in turn overridden by the environment.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application name used for config directory.
const APP_NAME: &str = "jisho-anki";

/// Default config filename.
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding the AnkiConnect address.
pub const ANKICONNECT_ADDRESS_VAR: &str = "ANKICONNECT_ADDRESS";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AnkiConnect settings.
    pub anki: AnkiConfig,

    /// Jisho settings.
    pub jisho: JishoConfig,

    /// Settings shared by every HTTP client.
    pub http: HttpConfig,
}

/// AnkiConnect configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// Address of the AnkiConnect add-on.
    pub address: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            address: "http://localhost:8765".to_string(),
        }
    }
}

/// Jisho configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JishoConfig {
    /// Site root; search pages and the word API hang off it.
    pub base_url: String,
}

impl Default for JishoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jisho.org".to_string(),
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    pub timeout_sec: f64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_sec: 30.0,
            user_agent: concat!("jisho-anki/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    /// Returns the request timeout as a `Duration`.
    ///
    /// Fails for zero, negative, non-finite or out-of-range values.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: "http.timeout_sec".to_string(),
            message: "must be a positive number of seconds".to_string(),
        };

        if self.timeout_sec <= 0.0 {
            return Err(invalid());
        }
        Duration::try_from_secs_f64(self.timeout_sec).map_err(|_| invalid())
    }
}

impl Config {
    /// Returns the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads configuration from the default location, then applies the environment.
    ///
    /// If the config file doesn't exist, creates a default one.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from a specific path, then applies the environment.
    ///
    /// The result is validated before it is returned.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Builds configuration from defaults and the environment only.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Saves configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides using `lookup` in place of the process environment.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup(ANKICONNECT_ADDRESS_VAR) {
            self.anki.address = address;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("anki.address", &self.anki.address)?;
        validate_url("jisho.base_url", &self.jisho.base_url)?;

        self.http.timeout()?;

        Ok(())
    }
}

fn validate_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })?;

    if parsed.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must be an http(s) URL".to_string(),
        });
    }

    Ok(())
}
