//! ULID value type

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::base32::{
    self, DecodeError, ENCODED_LEN, MAX_TIMESTAMP, RANDOM_LEN, TIMESTAMP_LEN,
};
use crate::error::UlidError;
use crate::generator::time::{millis_from_datetime, now_ms};
use crate::random::{RandSource, ThreadRandom};

/// A decoded ULID: 48-bit millisecond timestamp plus 80 bits of randomness.
///
/// Ordering compares the timestamp first and then the random bytes, which is the
/// same as comparing the 128-bit big-endian value or the encoded strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ulid {
    timestamp_ms: u64,
    random: [u8; RANDOM_LEN],
}

impl Ulid {
    /// The all-zero ULID, `00000000000000000000000000`
    pub const ZERO: Ulid = Ulid::from_parts(0, [0; RANDOM_LEN]);

    /// Create a ULID from its components
    ///
    /// # Returns
    /// * `Result<Ulid, UlidError>` - The ULID, or `TimestampOutOfRange` when the
    ///   timestamp does not fit in 48 bits
    pub const fn try_from_parts(
        timestamp_ms: u64,
        random: [u8; RANDOM_LEN],
    ) -> Result<Self, UlidError> {
        if timestamp_ms > MAX_TIMESTAMP {
            return Err(UlidError::TimestampOutOfRange {
                timestamp_ms,
                max: MAX_TIMESTAMP,
            });
        }
        Ok(Self::from_parts(timestamp_ms, random))
    }

    /// Unchecked constructor; `timestamp_ms` must not exceed `MAX_TIMESTAMP`
    #[inline(always)]
    pub(crate) const fn from_parts(timestamp_ms: u64, random: [u8; RANDOM_LEN]) -> Self {
        Self {
            timestamp_ms,
            random,
        }
    }

    /// Create a ULID for the current time with fresh randomness.
    ///
    /// Not monotonic: two calls within one millisecond are ordered at random. Use
    /// [`UlidGenerator`](crate::UlidGenerator) or [`generate`](crate::generate) when
    /// ordering matters.
    pub fn new() -> Self {
        Self::from_parts(now_ms(), ThreadRandom.random_bytes())
    }

    /// Create a ULID whose timestamp matches `at`, with fresh randomness.
    ///
    /// Times before the Unix epoch clamp to zero. Not monotonic.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self::from_parts(millis_from_datetime(at), ThreadRandom.random_bytes())
    }

    /// Milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// The 10-byte random component
    #[inline(always)]
    pub const fn random(&self) -> &[u8; RANDOM_LEN] {
        &self.random
    }

    /// Timestamp as a UTC datetime, if chrono can represent it
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp_ms)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }

    /// Big-endian bytes: 6 timestamp bytes followed by the 10 random bytes
    pub fn to_bytes(&self) -> [u8; 16] {
        let timestamp = self.timestamp_ms.to_be_bytes();
        let mut bytes = [0u8; 16];
        bytes[..TIMESTAMP_LEN].copy_from_slice(&timestamp[8 - TIMESTAMP_LEN..]);
        bytes[TIMESTAMP_LEN..].copy_from_slice(&self.random);
        bytes
    }

    /// Inverse of [`Ulid::to_bytes`]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut timestamp = [0u8; 8];
        timestamp[8 - TIMESTAMP_LEN..].copy_from_slice(&bytes[..TIMESTAMP_LEN]);
        let mut random = [0u8; RANDOM_LEN];
        random.copy_from_slice(&bytes[TIMESTAMP_LEN..]);
        Self::from_parts(u64::from_be_bytes(timestamp), random)
    }

    /// The 128-bit integer value
    pub fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.to_bytes())
    }

    /// Encode as 26 ASCII bytes
    pub fn encode_array(&self) -> [u8; ENCODED_LEN] {
        base32::encode_array(self.timestamp_ms, &self.random)
    }

    /// Add one to the random component as a big-endian 80-bit integer.
    ///
    /// Returns `false` when every byte was `0xFF`; the bytes have wrapped to zero
    /// and the caller has to pick a new random value.
    pub(crate) fn increment_random(&mut self) -> bool {
        for byte in self.random.iter_mut().rev() {
            if *byte == u8::MAX {
                *byte = 0;
                continue;
            }
            *byte += 1;
            return true;
        }
        false
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.encode_array() {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl FromStr for Ulid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        base32::try_decode(s)
    }
}

impl From<Ulid> for u128 {
    fn from(ulid: Ulid) -> Self {
        ulid.to_u128()
    }
}
