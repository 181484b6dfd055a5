//! Notification requests and the encoder that turns them into frames.

pub mod encoder;
pub mod notification;
