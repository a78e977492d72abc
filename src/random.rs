//! Sources of randomness for the 80-bit ULID component

use rand::{rng, RngCore};

use crate::base32::RANDOM_LEN;

/// A trait for sources that produce the random component of a ULID.
///
/// The default [`ThreadRandom`] draws from the thread-local RNG. Tests plug in a
/// fixed source to make generation deterministic.
///
/// # Example
/// ```
/// use monoulid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn random_bytes(&self) -> [u8; 10] {
///         [7; 10]
///     }
/// }
///
/// assert_eq!(FixedRand.random_bytes(), [7; 10]);
/// ```
pub trait RandSource {
    /// Returns 10 fresh random bytes.
    fn random_bytes(&self) -> [u8; RANDOM_LEN];
}

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// Zero-sized; each call reaches for the calling thread's generator, so it can be
/// shared freely across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn random_bytes(&self) -> [u8; RANDOM_LEN] {
        let mut bytes = [0u8; RANDOM_LEN];
        rng().fill_bytes(&mut bytes);
        bytes
    }
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn random_bytes(&self) -> [u8; RANDOM_LEN] {
        (**self).random_bytes()
    }
}
