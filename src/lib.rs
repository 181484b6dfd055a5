//! # push-frame
//!
//! Encoder for the legacy binary push-notification protocol.
//!
//! One [`NotificationRequest`] becomes one self-contained [`EncodedFrame`]:
//!
//! ```text
//! [Command(1)=1] [Identifier(4)] [Expiry(4)] [TokenLen(2)=32] [Token(32)] [PayloadLen(2)] [Payload(N)]
//! ```
//!
//! The payload is compact JSON of the form `{"aps":{...},...custom}` and may not exceed
//! 256 bytes. Encoding is pure: no I/O, no shared state, safe to call from any thread.
//! Sending the bytes, retrying and queueing belong to the caller.
//!
//! ## Example
//! ```rust
//! use push_frame::{encode, NotificationRequest};
//!
//! let request = NotificationRequest::new(
//!     "3b1c019d 5e2f4a6b 8c0d1e2f 3a4b5c6d 7e8f90a1 b2c3d4e5 f6071829 3a4b5c6d",
//! )
//! .with_alert("Hello")
//! .with_badge(3)
//! .with_identifier(7)
//! .with_expiry(1000);
//!
//! let frame = encode(&request).unwrap();
//! assert_eq!(frame.as_bytes()[0], 1);
//! assert_eq!(frame.payload(), br#"{"aps":{"alert":"Hello","badge":3}}"#);
//! ```
//!
//! ## Modules
//! - [`protocol`]: request types and the encoder
//! - [`core`]: token parsing, payload assembly, frame layout, codec
//! - [`config`]: encoder and logging configuration
//! - [`error`]: typed errors
//! - [`utils`]: logging setup and time helpers

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

pub use crate::core::frame::{Frame, COMMAND_SIMPLE, HEADER_LEN};
pub use crate::core::payload::MAX_PAYLOAD_SIZE;
pub use crate::core::token::{DeviceToken, DEVICE_TOKEN_LEN};
pub use crate::error::{DecodeError, EncodeError, TokenError};
pub use crate::protocol::encoder::{encode, EncodedFrame, NotificationEncoder};
pub use crate::protocol::notification::{Alert, Expiry, NotificationRequest};
