use thiserror::Error;

/// Represents errors that can occur while encoding a ULID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UlidError {
    /// The random component was not exactly 10 bytes long
    #[error("ULID random component must be 10 bytes, got {len}")]
    InvalidInput { len: usize },
    /// The timestamp does not fit in 48 bits
    #[error("Timestamp {timestamp_ms} does not fit in 48 bits. Maximum allowed value is {max}")]
    TimestampOutOfRange { timestamp_ms: u64, max: u64 },
}
