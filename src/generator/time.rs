//! Time utilities for ULID generation
//!
//! Converts wall-clock time and caller-supplied datetimes into 48-bit milliseconds
//! since the Unix epoch

use chrono::{DateTime, Utc};

use crate::base32::MAX_TIMESTAMP;

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub(crate) fn now_ms() -> u64 {
    millis_from_datetime(Utc::now())
}

/// Milliseconds since Unix epoch for `at`, clamped to `[0, MAX_TIMESTAMP]`
#[inline]
pub(crate) fn millis_from_datetime(at: DateTime<Utc>) -> u64 {
    clamp_millis(at.timestamp_millis())
}

#[inline(always)]
pub(crate) const fn clamp_millis(millis: i64) -> u64 {
    if millis <= 0 {
        0
    } else if millis as u64 > MAX_TIMESTAMP {
        MAX_TIMESTAMP
    } else {
        millis as u64
    }
}
