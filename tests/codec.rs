//! Integration tests for the framing codec
//!
//! The codec only appends to and splits from caller-owned buffers; these tests drive
//! it directly and through `tokio_util`'s framed adapters over in-memory I/O.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use bytes::BytesMut;
use futures::{SinkExt, StreamExt};
use push_frame::core::codec::FrameCodec;
use push_frame::error::{CodecError, DecodeError, EncodeError};
use push_frame::{encode, NotificationRequest, HEADER_LEN};
use tokio_util::codec::{Decoder, Encoder, FramedRead, FramedWrite};

const TOKEN: &str = "3b1c019d5e2f4a6b8c0d1e2f3a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d";

fn request(identifier: u32) -> NotificationRequest {
    NotificationRequest::new(TOKEN)
        .with_alert(format!("message {identifier}"))
        .with_identifier(identifier)
}

#[test]
fn test_codec_matches_encode() {
    let mut codec = FrameCodec::default();
    let mut buf = BytesMut::new();
    codec.encode(&request(1), &mut buf).expect("Failed to encode");

    let direct = encode(&request(1)).expect("Failed to encode");
    assert_eq!(&buf[..], direct.as_bytes());
}

#[test]
fn test_codec_decodes_one_frame_at_a_time() {
    let mut codec = FrameCodec::default();
    let mut buf = BytesMut::new();
    codec.encode(&request(1), &mut buf).unwrap();
    codec.encode(&request(2), &mut buf).unwrap();

    let first = codec.decode(&mut buf).unwrap().expect("first frame");
    assert_eq!(first.identifier, 1);
    assert!(!buf.is_empty());

    let second = codec.decode(&mut buf).unwrap().expect("second frame");
    assert_eq!(second.identifier, 2);
    assert!(buf.is_empty());

    assert!(codec.decode(&mut buf).unwrap().is_none());
}

#[test]
fn test_codec_partial_header_preserves_buffer() {
    let mut codec = FrameCodec::default();
    let mut buf = BytesMut::from(&[0x01, 0x00, 0x00, 0x00, 0x07][..]);

    let result = codec.decode(&mut buf).expect("Decode should not error");
    assert!(result.is_none());
    assert_eq!(buf.len(), 5);
}

#[test]
fn test_codec_rejects_bad_token_length_field() {
    let mut codec = FrameCodec::default();
    let mut buf = BytesMut::new();
    codec.encode(&request(3), &mut buf).unwrap();
    buf[10] = 64;

    match codec.decode(&mut buf) {
        Err(CodecError::Decode(DecodeError::InvalidTokenLength(64))) => {}
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_codec_respects_encoder_limit() {
    let encoder = push_frame::NotificationEncoder::new(push_frame::config::PayloadConfig {
        max_payload_size: 16,
    });
    let mut codec = FrameCodec::new(encoder);
    let mut buf = BytesMut::new();

    let err = codec.encode(&request(4), &mut buf).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Encode(EncodeError::PayloadTooLarge { max: 16, .. })
    ));
    assert!(buf.is_empty());
    assert_eq!(codec.encoder().max_payload_size(), 16);
}

#[tokio::test]
async fn test_framed_write_then_read() {
    let mut sink = FramedWrite::new(Vec::new(), FrameCodec::default());
    for id in 0..3 {
        let frame = encode(&request(id)).unwrap();
        sink.send(frame).await.expect("Failed to write frame");
    }
    let written = sink.into_inner();

    let mut stream = FramedRead::new(&written[..], FrameCodec::default());
    let mut seen = Vec::new();
    while let Some(frame) = stream.next().await {
        let frame = frame.expect("Failed to read frame");
        assert!(frame.encoded_len() > HEADER_LEN);
        seen.push(frame.identifier);
    }

    assert_eq!(seen, vec![0, 1, 2]);
}
