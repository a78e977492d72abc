//! Monotonic ULID generator
//!
//! Split into modules for testability:
//! - `builder` - Generator configuration
//! - `time` - Wall-clock time utilities
//! - `generate` - ID generation logic
//! - `seed` - Resuming from a previously issued ULID

mod builder;
mod generate;
mod seed;
pub(crate) mod time;

use parking_lot::Mutex;

use crate::random::{RandSource, ThreadRandom};
use crate::ulid::Ulid;

pub use builder::UlidGeneratorBuilder;

/// Thread-safe monotonic ULID generator.
///
/// Holds the last issued timestamp and random component behind a single lock.
/// When the clock has not advanced past the last timestamp (same millisecond, or
/// the clock moved backwards) the random component is incremented instead, so
/// every ULID sorts after the one before it.
#[derive(Debug)]
pub struct UlidGenerator<R = ThreadRandom> {
    pub(crate) state: Mutex<Ulid>,
    rng: R,
}

impl UlidGenerator<ThreadRandom> {
    /// Create with the thread-local RNG and zero state
    pub fn new() -> Self {
        Self::with_rand_source(ThreadRandom)
    }

    /// Create a new generator builder
    pub fn builder() -> UlidGeneratorBuilder<ThreadRandom> {
        UlidGeneratorBuilder::new()
    }
}

impl Default for UlidGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandSource> UlidGenerator<R> {
    /// Create with a custom random source and zero state
    pub fn with_rand_source(rng: R) -> Self {
        Self {
            state: Mutex::new(Ulid::ZERO),
            rng,
        }
    }

    /// The most recently issued (or seeded) ULID
    ///
    /// Returns [`Ulid::ZERO`] for a fresh generator. Persist this value and pass it to
    /// [`UlidGenerator::seed`] after a restart to keep sequences increasing.
    pub fn last(&self) -> Ulid {
        *self.state.lock()
    }

    #[inline(always)]
    fn fresh_random(&self) -> [u8; crate::base32::RANDOM_LEN] {
        self.rng.random_bytes()
    }
}
