//! # Configuration Management
//!
//! Configuration for the encoder and for the crate's logging setup.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - TOML strings via `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults
//!
//! The payload limit defaults to the legacy protocol's 256 bytes. Raising it only
//! makes sense for a receiver that accepts larger bodies.

use crate::core::frame::MAX_WIRE_PAYLOAD;
use crate::core::payload::MAX_PAYLOAD_SIZE;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

/// Environment variable overriding [`PayloadConfig::max_payload_size`]
pub const ENV_MAX_PAYLOAD_SIZE: &str = "PUSH_FRAME_MAX_PAYLOAD_SIZE";

/// Environment variable overriding [`LoggingConfig::log_level`]
pub const ENV_LOG_LEVEL: &str = "PUSH_FRAME_LOG_LEVEL";

/// Environment variable overriding [`LoggingConfig::json_format`]
pub const ENV_LOG_JSON: &str = "PUSH_FRAME_LOG_JSON";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PushConfig {
    /// Payload limits applied by the encoder
    #[serde(default)]
    pub payload: PayloadConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PushConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Self>(content)?)
    }

    /// Defaults overridden by any `PUSH_FRAME_*` environment variables that parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(size) = std::env::var(ENV_MAX_PAYLOAD_SIZE) {
            if let Ok(val) = size.parse::<usize>() {
                config.payload.max_payload_size = val;
            }
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            if let Ok(val) = level.parse::<Level>() {
                config.logging.log_level = val;
            }
        }

        if let Ok(json) = std::env::var(ENV_LOG_JSON) {
            if let Ok(val) = json.parse::<bool>() {
                config.logging.json_format = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration. An empty list means it is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.payload.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<(), ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

/// Payload limits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Largest serialized payload, in bytes, the encoder accepts
    pub max_payload_size: usize,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
        }
    }
}

impl PayloadConfig {
    /// Validate payload configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_payload_size == 0 {
            errors.push("Max payload size cannot be 0".to_string());
        } else if self.max_payload_size > MAX_WIRE_PAYLOAD {
            errors.push(format!(
                "Max payload size too large: {} bytes (wire limit: {} bytes)",
                self.max_payload_size, MAX_WIRE_PAYLOAD
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name attached to log output
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("push-frame"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = level.as_str().to_ascii_lowercase();
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
