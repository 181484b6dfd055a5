//! Device token parsing.
//!
//! Tokens arrive as 64 hex digits, usually grouped with spaces
//! (`"3b1c019d 5e..."`). Only spaces are stripped; anything else that is not a hex
//! digit is rejected.

use crate::error::TokenError;
use std::fmt;
use std::str::FromStr;

/// Length in bytes of a raw device token.
pub const DEVICE_TOKEN_LEN: usize = 32;

/// A 32-byte device token.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceToken([u8; DEVICE_TOKEN_LEN]);

impl DeviceToken {
    /// Wrap raw token bytes.
    pub const fn new(bytes: [u8; DEVICE_TOKEN_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw token bytes as written to the wire.
    pub fn as_bytes(&self) -> &[u8; DEVICE_TOKEN_LEN] {
        &self.0
    }

    /// Parse a hex token, ignoring space characters.
    ///
    /// # Errors
    /// - [`TokenError::InvalidHex`] for the first non-hex character, with its
    ///   character index in the space-stripped text
    /// - [`TokenError::InvalidLength`] if the remaining digits are not exactly 64
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let stripped = strip_spaces(token);

        if let Some((position, character)) = stripped
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(TokenError::InvalidHex {
                position,
                character,
            });
        }

        // All ASCII from here, so the byte length is the digit count
        let mut bytes = [0u8; DEVICE_TOKEN_LEN];
        hex::decode_to_slice(stripped.as_bytes(), &mut bytes)
            .map_err(|_| TokenError::InvalidLength(stripped.len()))?;

        Ok(Self(bytes))
    }
}

/// Remove every space character, leaving all other characters in place.
pub fn strip_spaces(token: &str) -> String {
    token.chars().filter(|c| *c != ' ').collect()
}

impl FromStr for DeviceToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; DEVICE_TOKEN_LEN]> for DeviceToken {
    fn from(bytes: [u8; DEVICE_TOKEN_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for DeviceToken {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceToken({self})")
    }
}
