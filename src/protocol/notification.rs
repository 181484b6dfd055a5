//! # Notification Request
//!
//! The input value object handed to the encoder. It has a closed set of typed fields;
//! every field other than `device_token` is optional or has a default.
//!
//! ```rust
//! use push_frame::{Alert, NotificationRequest};
//!
//! let token = "3b1c019d 5e2f4a6b 8c0d1e2f 3a4b5c6d 7e8f90a1 b2c3d4e5 f6071829 3a4b5c6d";
//! let request = NotificationRequest::new(token)
//!     .with_alert("Hello")
//!     .with_badge(3)
//!     .with_identifier(7)
//!     .with_expiry(1000);
//!
//! assert_eq!(request.alert, Some(Alert::Text("Hello".into())));
//! ```

use crate::utils::time;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::SystemTime;

/// Alert portion of the `aps` block, forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alert {
    /// Plain alert text
    Text(String),
    /// Structured alert dictionary (`body`, `loc-key`, ...)
    Dictionary(Map<String, Value>),
}

impl From<&str> for Alert {
    fn from(text: &str) -> Self {
        Alert::Text(text.to_string())
    }
}

impl From<String> for Alert {
    fn from(text: String) -> Self {
        Alert::Text(text)
    }
}

impl From<Map<String, Value>> for Alert {
    fn from(dict: Map<String, Value>) -> Self {
        Alert::Dictionary(dict)
    }
}

impl From<&Alert> for Value {
    fn from(alert: &Alert) -> Self {
        match alert {
            Alert::Text(text) => Value::String(text.clone()),
            Alert::Dictionary(dict) => Value::Object(dict.clone()),
        }
    }
}

/// Expiry timestamp in UNIX epoch seconds, as carried by the 32-bit wire field.
///
/// Zero is forwarded unchanged; its meaning is defined by the receiving service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expiry(u32);

impl Expiry {
    /// Expiry of zero.
    pub const NONE: Expiry = Expiry(0);

    /// Build from signed epoch seconds, keeping the low 32 bits.
    ///
    /// Negative values (instants before the epoch) map to zero.
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Expiry(time::truncate_epoch_seconds(seconds))
    }

    /// Seconds since the UNIX epoch as written to the frame.
    pub fn as_secs(self) -> u32 {
        self.0
    }
}

impl From<u32> for Expiry {
    fn from(seconds: u32) -> Self {
        Expiry(seconds)
    }
}

impl From<SystemTime> for Expiry {
    fn from(at: SystemTime) -> Self {
        Expiry::from_unix_seconds(time::unix_seconds(at))
    }
}

impl From<Expiry> for u32 {
    fn from(expiry: Expiry) -> Self {
        expiry.0
    }
}

/// Description of one push notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationRequest {
    /// Caller-chosen correlation id. Defaults to 0.
    #[serde(default)]
    pub identifier: u32,

    /// Delivery expiry. Defaults to 0.
    #[serde(default)]
    pub expiry: Expiry,

    /// Hex device token; spaces are ignored.
    pub device_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,

    /// Badge count. `Some(0)` is a present badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    /// Extra top-level payload keys, merged after `aps` in insertion order.
    ///
    /// A key named `aps` replaces the generated `aps` block entirely. Callers are
    /// responsible for avoiding that collision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

impl NotificationRequest {
    /// Start a request for `device_token` with every other field at its default.
    pub fn new(device_token: impl Into<String>) -> Self {
        Self {
            device_token: device_token.into(),
            ..Self::default()
        }
    }

    pub fn with_identifier(mut self, identifier: u32) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn with_expiry(mut self, expiry: impl Into<Expiry>) -> Self {
        self.expiry = expiry.into();
        self
    }

    pub fn with_alert(mut self, alert: impl Into<Alert>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    pub fn with_badge(mut self, badge: i64) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Add a single custom top-level key, keeping earlier keys in order.
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// True when an alert or a badge was supplied.
    pub fn has_payload(&self) -> bool {
        self.alert.is_some() || self.badge.is_some()
    }
}
