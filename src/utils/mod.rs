//! # Utility Modules
//!
//! - **Logging**: `tracing-subscriber` setup from [`LoggingConfig`](crate::config::LoggingConfig)
//! - **Time**: UNIX-epoch conversion for the 32-bit expiry field

pub mod logging;
pub mod time;
