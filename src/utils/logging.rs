//! Structured logging setup.
//!
//! The library only emits `tracing` events; applications that want them printed call
//! [`init_logging`] once at startup.

use crate::config::LoggingConfig;
use crate::error::ConfigError;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber configured from `config`.
///
/// `RUST_LOG` takes precedence over `config.log_level` when set.
///
/// # Errors
/// Returns [`ConfigError::Logging`] if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_ascii_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))?;

    tracing::info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
