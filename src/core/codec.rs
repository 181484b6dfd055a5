//! # Frame Codec
//!
//! `tokio_util` codec for handing frames to a framed transport owned by the caller.
//!
//! Encoding a [`NotificationRequest`] runs the full validation pipeline and appends one
//! frame to the destination buffer; on failure the buffer is left untouched. The
//! decoder waits until a whole frame is buffered and then splits off exactly one. A bad
//! command byte or token length is rejected as soon as those bytes arrive.
//!
//! ## Example
//! ```rust
//! use bytes::BytesMut;
//! use push_frame::core::codec::FrameCodec;
//! use push_frame::NotificationRequest;
//! use tokio_util::codec::{Decoder, Encoder};
//!
//! let request = NotificationRequest::new("ab".repeat(32)).with_badge(1);
//! let mut codec = FrameCodec::default();
//! let mut buf = BytesMut::new();
//! codec.encode(&request, &mut buf).unwrap();
//!
//! let frame = codec.decode(&mut buf).unwrap().unwrap();
//! assert_eq!(&frame.payload[..], br#"{"aps":{"badge":1}}"#);
//! ```

use crate::core::frame::{check_header, check_header_prefix, Frame, HEADER_LEN};
use crate::error::CodecError;
use crate::protocol::encoder::{EncodedFrame, NotificationEncoder};
use crate::protocol::notification::NotificationRequest;
use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

/// Codec pairing [`NotificationEncoder`] with [`Frame`] parsing.
#[derive(Debug, Clone, Default)]
pub struct FrameCodec {
    encoder: NotificationEncoder,
}

impl FrameCodec {
    /// Codec that encodes with `encoder`'s payload limits.
    pub fn new(encoder: NotificationEncoder) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &NotificationEncoder {
        &self.encoder
    }
}

impl Encoder<&NotificationRequest> for FrameCodec {
    type Error = CodecError;

    fn encode(
        &mut self,
        item: &NotificationRequest,
        dst: &mut BytesMut,
    ) -> Result<(), Self::Error> {
        let frame = self.encoder.encode(item)?;
        dst.extend_from_slice(frame.as_bytes());
        Ok(())
    }
}

impl Encoder<EncodedFrame> for FrameCodec {
    type Error = CodecError;

    fn encode(&mut self, item: EncodedFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.extend_from_slice(item.as_bytes());
        Ok(())
    }
}

impl Decoder for FrameCodec {
    type Item = Frame;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        check_header_prefix(src)?;

        if src.len() < HEADER_LEN {
            src.reserve(HEADER_LEN - src.len());
            return Ok(None);
        }

        let payload_len = check_header(src)?;
        let total = HEADER_LEN + payload_len;

        if src.len() < total {
            src.reserve(total - src.len());
            return Ok(None);
        }

        let frame = src.split_to(total);
        Ok(Some(Frame::read_checked(&frame)))
    }
}
