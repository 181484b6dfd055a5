//! # Error Types
//!
//! Error handling for notification encoding, frame decoding and configuration.
//!
//! Every failure in this crate is a deterministic function of its input, so none of
//! these errors are retryable. Callers branch on the variant; the `Display` text is
//! for humans only.
//!
//! ## Error Categories
//! - **Encode Errors**: the three validation failures of [`encode`](crate::encode)
//! - **Token Errors**: why a device token string could not be turned into 32 bytes
//! - **Decode Errors**: malformed frames handed to [`Frame::from_bytes`](crate::Frame::from_bytes)
//! - **Config Errors**: loading, saving and validating [`PushConfig`](crate::config::PushConfig)
//! - **Codec Errors**: the union used by the `tokio_util` codec
//!
//! ## Example Usage
//! ```rust
//! use push_frame::{encode, EncodeError, NotificationRequest};
//!
//! let request = NotificationRequest::new("00".repeat(32));
//! match encode(&request) {
//!     Err(EncodeError::MissingPayload) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants shared by the error variants and their tests.
pub mod constants {
    /// Encode errors
    pub const ERR_MISSING_PAYLOAD: &str = "Notification needs an alert or a badge";
    pub const ERR_PAYLOAD_TOO_LARGE: &str = "Serialized payload exceeds maximum size";
    pub const ERR_INVALID_DEVICE_TOKEN: &str = "Invalid device token";

    /// Frame decoding errors
    pub const ERR_FRAME_TOO_SHORT: &str = "Frame shorter than fixed header";
    pub const ERR_INVALID_COMMAND: &str = "Unsupported frame command";
    pub const ERR_INVALID_TOKEN_LENGTH: &str = "Unexpected device token length field";
    pub const ERR_FRAME_TRUNCATED: &str = "Frame truncated";
    pub const ERR_TRAILING_BYTES: &str = "Unexpected bytes after payload";
}

/// Failure to produce a frame from a [`NotificationRequest`](crate::NotificationRequest).
///
/// Exactly one variant is reported per call. When several conditions hold at once the
/// first one in declaration order wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Neither `alert` nor `badge` was supplied.
    #[error("Notification needs an alert or a badge")]
    MissingPayload,

    /// The compact JSON payload is larger than the configured limit.
    #[error("Serialized payload exceeds maximum size: {size} bytes (max {max})")]
    PayloadTooLarge {
        /// UTF-8 byte length of the serialized payload
        size: usize,
        /// Limit in force when the request was encoded
        max: usize,
    },

    /// The device token did not decode to exactly 32 bytes.
    #[error("Invalid device token: {0}")]
    InvalidDeviceToken(#[from] TokenError),
}

/// Why a device token string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A character outside `[0-9a-fA-F]` remained after stripping spaces.
    #[error("non-hex character {character:?} at position {position}")]
    InvalidHex {
        /// Character index into the space-stripped token
        position: usize,
        /// Offending character
        character: char,
    },

    /// The space-stripped token did not hold exactly 64 hex digits.
    #[error("expected 64 hex digits, got {0}")]
    InvalidLength(usize),
}

/// Failure to parse a byte buffer as a frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Frame shorter than fixed header: {actual} bytes (need {expected})")]
    FrameTooShort { expected: usize, actual: usize },

    #[error("Unsupported frame command: {0}")]
    InvalidCommand(u8),

    #[error("Unexpected device token length field: {0}")]
    InvalidTokenLength(u16),

    #[error("Frame truncated: payload length {expected}, {actual} bytes available")]
    FrameTruncated { expected: usize, actual: usize },

    #[error("Unexpected bytes after payload: {0}")]
    TrailingBytes(usize),
}

/// Failure to load, save or validate configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Configuration validation failed:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Errors surfaced through [`FrameCodec`](crate::core::codec::FrameCodec).
#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Type alias for Results defaulting to [`EncodeError`]
pub type Result<T, E = EncodeError> = std::result::Result<T, E>;
