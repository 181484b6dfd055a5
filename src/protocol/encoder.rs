//! # Notification Encoder
//!
//! Turns a [`NotificationRequest`] into one [`EncodedFrame`].
//!
//! Checks run in a fixed order and the first failure is the one reported:
//!
//! 1. an alert or a badge must be present ([`EncodeError::MissingPayload`])
//! 2. the compact JSON payload must fit the size limit ([`EncodeError::PayloadTooLarge`])
//! 3. the device token must be 32 bytes of hex once spaces are removed
//!    ([`EncodeError::InvalidDeviceToken`])
//!
//! The encoder holds only its immutable limits, so one instance can be shared freely
//! across threads.

use crate::config::PayloadConfig;
use crate::core::frame::{self, Frame, HEADER_LEN, MAX_WIRE_PAYLOAD};
use crate::core::payload::{build_payload, check_size, serialize_payload};
use crate::core::token::DeviceToken;
use crate::error::{DecodeError, EncodeError, Result};
use crate::protocol::notification::NotificationRequest;
use bytes::Bytes;
use tracing::debug;

/// Encode `request` with the default 256-byte payload limit.
///
/// # Errors
/// See the module documentation for the order in which errors are reported.
pub fn encode(request: &NotificationRequest) -> Result<EncodedFrame> {
    NotificationEncoder::default().encode(request)
}

/// Immutable bytes of one encoded frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedFrame(Bytes);

impl EncodedFrame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The JSON payload segment.
    pub fn payload(&self) -> &[u8] {
        &self.0[HEADER_LEN..]
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Parse the frame back into its fields.
    pub fn decode(&self) -> std::result::Result<Frame, DecodeError> {
        Frame::from_bytes(&self.0)
    }
}

impl AsRef<[u8]> for EncodedFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EncodedFrame> for Bytes {
    fn from(frame: EncodedFrame) -> Self {
        frame.0
    }
}

impl From<EncodedFrame> for Vec<u8> {
    fn from(frame: EncodedFrame) -> Self {
        frame.0.to_vec()
    }
}

/// Encoder carrying its payload limits.
#[derive(Debug, Clone, Default)]
pub struct NotificationEncoder {
    config: PayloadConfig,
}

impl NotificationEncoder {
    pub fn new(config: PayloadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PayloadConfig {
        &self.config
    }

    /// Effective payload limit, never larger than the wire length field allows.
    pub fn max_payload_size(&self) -> usize {
        self.config.max_payload_size.min(MAX_WIRE_PAYLOAD)
    }

    /// Validate `request` and pack it into a frame.
    pub fn encode(&self, request: &NotificationRequest) -> Result<EncodedFrame> {
        let result = self.encode_inner(request);
        match &result {
            Ok(frame) => debug!(
                identifier = request.identifier,
                frame_len = frame.len(),
                payload_len = frame.len() - HEADER_LEN,
                "Encoded notification frame"
            ),
            Err(e) => debug!(identifier = request.identifier, error = %e, "Rejected notification"),
        }
        result
    }

    fn encode_inner(&self, request: &NotificationRequest) -> Result<EncodedFrame> {
        if !request.has_payload() {
            return Err(EncodeError::MissingPayload);
        }

        let payload = serialize_payload(&build_payload(request));
        check_size(&payload, self.max_payload_size())?;

        let token = DeviceToken::parse(&request.device_token)?;

        let bytes = frame::pack(request.identifier, request.expiry, &token, payload.as_bytes())?;
        Ok(EncodedFrame(bytes))
    }
}
