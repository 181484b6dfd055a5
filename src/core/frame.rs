//! # Frame Layout
//!
//! Packing and parsing of the legacy "simple notification" frame. All integers are
//! big-endian.
//!
//! ```text
//! [Command(1)=1] [Identifier(4)] [Expiry(4)] [TokenLen(2)=32] [Token(32)] [PayloadLen(2)] [Payload(N)]
//! ```
//!
//! [`pack`] takes an already parsed [`DeviceToken`] and refuses payloads the 16-bit
//! length field cannot describe. [`Frame::from_bytes`] is the inverse, used to inspect
//! frames and by the codec's decoder.

use crate::core::token::{DeviceToken, DEVICE_TOKEN_LEN};
use crate::error::{DecodeError, EncodeError};
use crate::protocol::notification::Expiry;
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Command byte of the simple notification frame.
pub const COMMAND_SIMPLE: u8 = 1;

/// Bytes before the payload: command, identifier, expiry, token length, token,
/// payload length.
pub const HEADER_LEN: usize = 1 + 4 + 4 + 2 + DEVICE_TOKEN_LEN + 2;

/// Offset of the token length field.
pub(crate) const TOKEN_LEN_OFFSET: usize = 1 + 4 + 4;

/// Offset of the payload length field.
pub(crate) const PAYLOAD_LEN_OFFSET: usize = HEADER_LEN - 2;

/// Largest payload the 16-bit length field can describe.
pub const MAX_WIRE_PAYLOAD: usize = u16::MAX as usize;

/// Write one frame into `dst`.
///
/// # Errors
/// Returns [`EncodeError::PayloadTooLarge`] with `max` set to [`MAX_WIRE_PAYLOAD`] if
/// `payload` does not fit the length field. Nothing is written in that case.
pub fn pack_into(
    dst: &mut BytesMut,
    identifier: u32,
    expiry: Expiry,
    token: &DeviceToken,
    payload: &[u8],
) -> Result<(), EncodeError> {
    let payload_len = u16::try_from(payload.len()).map_err(|_| EncodeError::PayloadTooLarge {
        size: payload.len(),
        max: MAX_WIRE_PAYLOAD,
    })?;

    dst.reserve(HEADER_LEN + payload.len());
    dst.put_u8(COMMAND_SIMPLE);
    dst.put_u32(identifier);
    dst.put_u32(expiry.as_secs());
    dst.put_u16(DEVICE_TOKEN_LEN as u16);
    dst.put_slice(token.as_bytes());
    dst.put_u16(payload_len);
    dst.put_slice(payload);
    Ok(())
}

/// Pack one frame into a fresh immutable buffer.
///
/// # Errors
/// Same as [`pack_into`].
pub fn pack(
    identifier: u32,
    expiry: Expiry,
    token: &DeviceToken,
    payload: &[u8],
) -> Result<Bytes, EncodeError> {
    let mut buf = BytesMut::with_capacity(HEADER_LEN + payload.len());
    pack_into(&mut buf, identifier, expiry, token, payload)?;
    Ok(buf.freeze())
}

/// Decoded view of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub identifier: u32,
    pub expiry: Expiry,
    pub device_token: DeviceToken,
    /// UTF-8 JSON payload bytes
    pub payload: Bytes,
}

impl Frame {
    /// Parse exactly one frame from `bytes`.
    ///
    /// # Errors
    /// Returns a [`DecodeError`] when the header is short or malformed, the payload is
    /// truncated, or bytes follow the payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let payload_len = check_header(bytes)?;
        let total = HEADER_LEN + payload_len;

        if bytes.len() < total {
            return Err(DecodeError::FrameTruncated {
                expected: payload_len,
                actual: bytes.len() - HEADER_LEN,
            });
        }
        if bytes.len() > total {
            return Err(DecodeError::TrailingBytes(bytes.len() - total));
        }

        Ok(Self::read_checked(bytes))
    }

    /// Serialize back to wire bytes.
    ///
    /// # Errors
    /// Returns [`EncodeError::PayloadTooLarge`] if `payload` exceeds [`MAX_WIRE_PAYLOAD`].
    pub fn to_bytes(&self) -> Result<Bytes, EncodeError> {
        pack(self.identifier, self.expiry, &self.device_token, &self.payload)
    }

    /// Total encoded size of this frame.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }

    /// Payload parsed as JSON.
    pub fn payload_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.payload)
    }

    /// Read fields from a buffer already validated by [`check_header`] and known to
    /// hold the whole frame.
    pub(crate) fn read_checked(mut bytes: &[u8]) -> Self {
        bytes.advance(1);
        let identifier = bytes.get_u32();
        let expiry = Expiry::from(bytes.get_u32());
        bytes.advance(2);

        let mut token = [0u8; DEVICE_TOKEN_LEN];
        bytes.copy_to_slice(&mut token);

        let payload_len = bytes.get_u16() as usize;
        let payload = Bytes::copy_from_slice(&bytes[..payload_len]);

        Self {
            identifier,
            expiry,
            device_token: DeviceToken::new(token),
            payload,
        }
    }
}

/// Check whatever header fields `bytes` already holds.
///
/// Lets a streaming reader reject a bad command byte or token length before the
/// full header has arrived.
pub(crate) fn check_header_prefix(bytes: &[u8]) -> Result<(), DecodeError> {
    if let Some(&command) = bytes.first() {
        if command != COMMAND_SIMPLE {
            return Err(DecodeError::InvalidCommand(command));
        }
    }

    if let Some(field) = bytes.get(TOKEN_LEN_OFFSET..TOKEN_LEN_OFFSET + 2) {
        let token_len = u16::from_be_bytes([field[0], field[1]]);
        if token_len as usize != DEVICE_TOKEN_LEN {
            return Err(DecodeError::InvalidTokenLength(token_len));
        }
    }

    Ok(())
}

/// Validate the fixed header and return the declared payload length.
pub(crate) fn check_header(bytes: &[u8]) -> Result<usize, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::FrameTooShort {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    check_header_prefix(bytes)?;

    Ok(u16::from_be_bytes([bytes[PAYLOAD_LEN_OFFSET], bytes[PAYLOAD_LEN_OFFSET + 1]]) as usize)
}
