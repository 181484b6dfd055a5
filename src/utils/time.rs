//! UNIX-epoch helpers for the 32-bit expiry field.

use std::time::{SystemTime, UNIX_EPOCH};

/// Whole seconds between the UNIX epoch and `at`; negative before the epoch.
pub fn unix_seconds(at: SystemTime) -> i64 {
    match at.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => {
            let secs = i64::try_from(before.duration().as_secs()).unwrap_or(i64::MAX);
            -secs
        }
    }
}

/// Fit epoch seconds into the wire field: negatives become 0, otherwise the low
/// 32 bits are kept.
#[inline]
pub fn truncate_epoch_seconds(seconds: i64) -> u32 {
    if seconds < 0 {
        0
    } else {
        (seconds as u64 & u64::from(u32::MAX)) as u32
    }
}
