//! # Payload Assembly
//!
//! Builds the JSON document carried in the frame body:
//!
//! ```text
//! { "aps": { "alert": ..., "badge": ..., "sound": ... }, <custom keys...> }
//! ```
//!
//! Only supplied keys appear inside `aps`, always in the order alert, badge, sound.
//! Custom keys are merged onto the document afterwards, last write wins, so a custom
//! `aps` key replaces the generated block. Maps preserve insertion order, which keeps
//! the serialized bytes stable from one call to the next.

use crate::error::{EncodeError, Result};
use crate::protocol::notification::NotificationRequest;
use serde_json::{Map, Value};

/// Key of the reserved payload block.
pub const APS_KEY: &str = "aps";

/// Maximum serialized payload size accepted by the legacy protocol.
pub const MAX_PAYLOAD_SIZE: usize = 256;

/// Assemble the payload object for `request`.
pub fn build_payload(request: &NotificationRequest) -> Value {
    let mut aps = Map::new();
    if let Some(alert) = &request.alert {
        aps.insert("alert".to_string(), Value::from(alert));
    }
    if let Some(badge) = request.badge {
        aps.insert("badge".to_string(), Value::from(badge));
    }
    if let Some(sound) = &request.sound {
        aps.insert("sound".to_string(), Value::String(sound.clone()));
    }

    let mut payload = Map::new();
    payload.insert(APS_KEY.to_string(), Value::Object(aps));

    if let Some(custom) = &request.custom {
        for (key, value) in custom {
            payload.insert(key.clone(), value.clone());
        }
    }

    Value::Object(payload)
}

/// Compact JSON text for `payload`.
#[inline]
pub fn serialize_payload(payload: &Value) -> String {
    // Display on Value is the compact serializer and cannot fail.
    payload.to_string()
}

/// Reject serialized payloads longer than `max` bytes.
pub fn check_size(serialized: &str, max: usize) -> Result<()> {
    let size = serialized.len();
    if size > max {
        return Err(EncodeError::PayloadTooLarge { size, max });
    }
    Ok(())
}
