//! Resuming a generator from a previously issued ULID

use tracing::debug;

use super::UlidGenerator;
use crate::base32::{self, MAX_TIMESTAMP};
use crate::random::RandSource;
use crate::ulid::Ulid;

impl<R: RandSource> UlidGenerator<R> {
    /// Seed the generator from an existing ULID string.
    ///
    /// The state only moves forward: a seed that sorts at or before the current state
    /// is ignored, and so is a string that does not decode. Returns whether the state
    /// changed.
    pub fn seed(&self, existing: &str) -> bool {
        match base32::decode(existing) {
            Some(ulid) => self.seed_ulid(ulid),
            None => {
                debug!(len = existing.len(), "ignoring undecodable ULID seed");
                false
            }
        }
    }

    /// Seed the generator from a decoded ULID
    ///
    /// Timestamps beyond 48 bits cannot be encoded and are ignored.
    pub fn seed_ulid(&self, ulid: Ulid) -> bool {
        if ulid.timestamp_ms() > MAX_TIMESTAMP {
            debug!(timestamp_ms = ulid.timestamp_ms(), "ignoring out of range ULID seed");
            return false;
        }

        let mut state = self.state.lock();
        let last = *state;
        if ulid <= last {
            debug!(%ulid, %last, "ULID seed does not advance generator");
            return false;
        }

        *state = ulid;
        debug!(%ulid, "generator seeded");
        true
    }
}
