//! ID generation logic

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use super::time::{millis_from_datetime, now_ms};
use super::UlidGenerator;
use crate::random::RandSource;
use crate::ulid::Ulid;

impl<R: RandSource> UlidGenerator<R> {
    /// Generate the next ULID string for the current time
    #[inline]
    pub fn next(&self) -> String {
        self.next_ulid().to_string()
    }

    /// Generate the next ULID string using `at` as the current time
    ///
    /// The result still sorts after everything issued before, even when `at` is
    /// earlier than a previous call.
    #[inline]
    pub fn next_at(&self, at: DateTime<Utc>) -> String {
        self.next_ulid_at(at).to_string()
    }

    /// Generate the next ULID for the current time
    #[inline]
    pub fn next_ulid(&self) -> Ulid {
        self.next_with(now_ms)
    }

    /// Generate the next ULID using `at` as the current time
    #[inline]
    pub fn next_ulid_at(&self, at: DateTime<Utc>) -> Ulid {
        let ms = millis_from_datetime(at);
        self.next_with(|| ms)
    }

    /// Advance the state under the lock and return a copy of it.
    ///
    /// `now` is read while holding the lock so calls are ordered by their timestamps.
    #[instrument(level = "trace", skip_all)]
    pub(crate) fn next_with<F>(&self, now: F) -> Ulid
    where
        F: FnOnce() -> u64,
    {
        let mut state = self.state.lock();
        let now_ms = now();
        let last_ms = state.timestamp_ms();

        // New millisecond: fresh randomness
        if now_ms > last_ms {
            *state = Ulid::from_parts(now_ms, self.fresh_random());
            return *state;
        }

        if now_ms < last_ms {
            debug!(now_ms, last_ms, "clock behind last ULID timestamp, reusing it");
        }

        if !state.increment_random() {
            // 80-bit counter wrapped; ordering within this millisecond is lost
            warn!(
                timestamp_ms = last_ms,
                "ULID random component overflowed, re-randomizing"
            );
            *state = Ulid::from_parts(last_ms, self.fresh_random());
        }

        *state
    }
}
