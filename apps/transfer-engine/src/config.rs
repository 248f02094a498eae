//! Configuration module for the transfer engine.
//!
//! Provides configuration loading and validation for the transfer
//! service. Settings come from an optional YAML file with environment
//! variable overrides.
//!
//! # Usage
//!
//! ```rust,ignore
//! use transfer_engine::config::{Settings, load_settings};
//!
//! // Built-in defaults
//! let settings = Settings::default();
//!
//! // Load from a YAML file, then apply env overrides
//! let settings = load_settings(Some("config.yaml"))?;
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the lock-wait bound, in milliseconds.
pub const LOCK_WAIT_MS_ENV: &str = "TRANSFER_LOCK_WAIT_MS";

const DEFAULT_LOCK_WAIT_MS: u64 = 5_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Transfer execution settings.
    #[serde(default)]
    pub transfer: TransferSettings,
}

impl Settings {
    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any setting is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transfer.lock_wait_ms == 0 {
            return Err(ConfigError::ValidationError(
                "transfer.lock_wait_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for transfer execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferSettings {
    /// Upper bound on the total time a transfer may wait for its
    /// account locks, in milliseconds.
    #[serde(default = "default_lock_wait_ms")]
    pub lock_wait_ms: u64,
}

impl TransferSettings {
    /// Create settings with an explicit lock-wait bound.
    #[must_use]
    pub const fn new(lock_wait_ms: u64) -> Self {
        Self { lock_wait_ms }
    }

    /// The lock-wait bound as a `Duration`.
    #[must_use]
    pub const fn lock_wait(&self) -> Duration {
        Duration::from_millis(self.lock_wait_ms)
    }
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            lock_wait_ms: DEFAULT_LOCK_WAIT_MS,
        }
    }
}

const fn default_lock_wait_ms() -> u64 {
    DEFAULT_LOCK_WAIT_MS
}

/// Load settings from an optional YAML file and apply environment
/// overrides.
///
/// With no path, defaults are used as the base. The
/// `TRANSFER_LOCK_WAIT_MS` variable, when set, overrides the lock-wait
/// bound from either source.
///
/// # Errors
///
/// Returns `ReadError`/`ParseError` for an unreadable or malformed
/// file, or `ValidationError` if the merged settings fail validation.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                    path: path.to_string(),
                    source,
                })?;
            serde_yaml_bw::from_str(&content)?
        }
        None => Settings::default(),
    };

    if let Ok(value) = std::env::var(LOCK_WAIT_MS_ENV) {
        let parsed = value.parse::<u64>().map_err(|_| {
            ConfigError::ValidationError(format!(
                "{LOCK_WAIT_MS_ENV} must be an integer, got '{value}'"
            ))
        })?;
        settings.transfer.lock_wait_ms = parsed;
    }

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.transfer.lock_wait_ms, DEFAULT_LOCK_WAIT_MS);
    }

    #[test]
    fn transfer_settings_lock_wait_duration() {
        let settings = TransferSettings::new(250);
        assert_eq!(settings.lock_wait(), Duration::from_millis(250));
    }

    #[test]
    fn zero_lock_wait_fails_validation() {
        let settings = Settings {
            transfer: TransferSettings::new(0),
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn settings_parse_from_yaml() {
        let yaml = "transfer:\n  lock_wait_ms: 1200\n";
        let settings: Settings = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(settings.transfer.lock_wait_ms, 1200);
    }

    #[test]
    fn settings_parse_defaults_missing_sections() {
        let yaml = "{}\n";
        let settings: Settings = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(settings.transfer.lock_wait_ms, DEFAULT_LOCK_WAIT_MS);
    }

    #[test]
    fn load_settings_missing_file() {
        let err = load_settings(Some("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
