//! # Core Wire Components
//!
//! Device tokens, payload assembly, frame packing and the framing codec.
//!
//! ## Components
//! - **Token**: 32-byte device token parsed from spaced hex
//! - **Payload**: `aps` block assembly, compact JSON and the size check
//! - **Frame**: binary layout, packing and parsing
//! - **Codec**: Tokio codec writing frames into caller-owned buffers
//!
//! ## Wire Format
//! ```text
//! [Command(1)] [Identifier(4)] [Expiry(4)] [TokenLen(2)] [Token(32)] [PayloadLen(2)] [Payload(N)]
//! ```
//!
//! ## Limits
//! - Payload: 256 bytes by default, never more than 65535 (16-bit length field)
//! - Token: exactly 32 bytes

pub mod codec;
pub mod frame;
pub mod payload;
pub mod token;
