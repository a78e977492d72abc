//! UlidGenerator builder for constructing configured generators

use super::UlidGenerator;
use crate::base32::{self, DecodeError};
use crate::random::{RandSource, ThreadRandom};
use crate::ulid::Ulid;

/// Builder for UlidGenerator
#[derive(Debug)]
pub struct UlidGeneratorBuilder<R = ThreadRandom> {
    rng: R,
    seed: Option<Ulid>,
}

impl UlidGeneratorBuilder<ThreadRandom> {
    /// Create a new builder using the thread-local RNG and no seed
    pub fn new() -> Self {
        Self {
            rng: ThreadRandom,
            seed: None,
        }
    }
}

impl Default for UlidGeneratorBuilder<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandSource> UlidGeneratorBuilder<R> {
    /// Use a different source for the random component
    pub fn rand_source<S: RandSource>(self, rng: S) -> UlidGeneratorBuilder<S> {
        UlidGeneratorBuilder {
            rng,
            seed: self.seed,
        }
    }

    /// Start from a previously issued ULID; undecodable strings are ignored
    pub fn seed(self, existing: &str) -> Self {
        match base32::decode(existing) {
            Some(ulid) => self.seed_ulid(ulid),
            None => self,
        }
    }

    /// Start from a previously issued ULID, rejecting strings that do not decode
    pub fn try_seed(self, existing: &str) -> Result<Self, DecodeError> {
        let ulid = base32::try_decode(existing)?;
        Ok(self.seed_ulid(ulid))
    }

    /// Start from a decoded ULID. With several seeds the greatest one wins.
    pub fn seed_ulid(mut self, ulid: Ulid) -> Self {
        self.seed = self.seed.max(Some(ulid));
        self
    }

    /// Build the final UlidGenerator
    pub fn build(self) -> UlidGenerator<R> {
        let generator = UlidGenerator::with_rand_source(self.rng);
        if let Some(seed) = self.seed {
            generator.seed_ulid(seed);
        }
        generator
    }
}
