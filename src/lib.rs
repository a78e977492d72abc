//! # monoulid
//!
//! Monotonic ULID (Universally Unique Lexicographically Sortable Identifier) generation.
//!
//! A ULID is a 48-bit millisecond timestamp followed by 80 bits of randomness,
//! written as 26 Crockford base32 characters. IDs are:
//! - 📈 Time-sorted
//! - 🔄 Monotonic within a process
//! - 🔒 Thread-safe
//! - 🔤 Case-insensitive and tolerant of `I`/`L`/`O` typos when decoding
//!
//! ```
//! let first = monoulid::generate();
//! let second = monoulid::generate();
//! assert!(second > first);
//!
//! let decoded = monoulid::decode(&first).unwrap();
//! assert_eq!(decoded.to_string(), first);
//! ```

#![forbid(unsafe_code)]

pub mod base32;
mod error;
mod generator;
mod random;
mod ulid;

#[cfg(test)]
pub mod tests;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

// Re-export main types
pub use base32::{
    decode, encode, try_decode, DecodeError, ENCODED_LEN, MAX_TIMESTAMP, RANDOM_LEN,
};
pub use error::UlidError;
pub use generator::{UlidGenerator, UlidGeneratorBuilder};
pub use random::{RandSource, ThreadRandom};
pub use ulid::Ulid;

/// Process-wide generator behind [`generate`] and [`generate_at`]
static SHARED: Lazy<UlidGenerator> = Lazy::new(UlidGenerator::new);

/// The process-wide shared generator, created on first use
pub fn shared() -> &'static UlidGenerator {
    &SHARED
}

/// Generate the next ULID from the shared generator
pub fn generate() -> String {
    shared().next()
}

/// Generate the next ULID from the shared generator using `at` as the current time
pub fn generate_at(at: DateTime<Utc>) -> String {
    shared().next_at(at)
}
