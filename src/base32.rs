//! Crockford base32 encoding and decoding for ULIDs
//!
//! This module converts between the binary form of a ULID (48-bit timestamp plus
//! 80 bits of randomness) and its fixed 26-character textual form. Everything here
//! is stateless and safe to call from any thread.

use once_cell::sync::Lazy;

use crate::error::UlidError;
use crate::ulid::Ulid;

/// Character set for Crockford base32 encoding (no I, L, O, U)
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of an encoded ULID
pub const ENCODED_LEN: usize = 26;

/// Length of the random component in bytes
pub const RANDOM_LEN: usize = 10;

/// Length of the timestamp component in bytes
pub const TIMESTAMP_LEN: usize = 6;

/// Largest timestamp representable in 48 bits (~year 10889)
pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

/// 26 chars * 5 bits = 130 bits, which needs 17 bytes
const ACC_LEN: usize = 17;

const BITS_PER_CHAR: u32 = 5;
const CHAR_MASK: u16 = 0x1F;

/// Encoding prepends two zero bits to the 128-bit value
const PREFIX_BITS: u32 = 2;

/// Lookup table for decoding base32 characters to their values
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in ALPHABET.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_lowercase() as usize] = i as i8;
    }
    // Ambiguous characters people tend to type in place of 0 and 1
    for c in [b'o', b'O'] {
        map[c as usize] = 0;
    }
    for c in [b'i', b'I', b'l', b'L'] {
        map[c as usize] = 1;
    }
    map
});

/// Encode a timestamp and random component into ULID bytes
///
/// `timestamp_ms` must already be within `MAX_TIMESTAMP`.
pub(crate) fn encode_array(timestamp_ms: u64, random: &[u8; RANDOM_LEN]) -> [u8; ENCODED_LEN] {
    let bytes = Ulid::from_parts(timestamp_ms, *random).to_bytes();

    let mut output = [0u8; ENCODED_LEN];
    let mut position = 0;
    let mut buffer = 0u16;
    let mut bits_left = PREFIX_BITS;

    for &byte in &bytes {
        buffer = (buffer << 8) | u16::from(byte);
        bits_left += 8;
        while bits_left >= BITS_PER_CHAR {
            bits_left -= BITS_PER_CHAR;
            output[position] = ALPHABET[((buffer >> bits_left) & CHAR_MASK) as usize];
            position += 1;
        }
    }

    output
}

/// Encode a timestamp and random component into a ULID string
///
/// # Arguments
/// * `timestamp_ms` - Milliseconds since the Unix epoch (48-bit)
/// * `random` - Exactly 10 bytes of randomness
///
/// # Returns
/// * `Result<String, UlidError>` - The 26-character ULID or an error for invalid input
pub fn encode(timestamp_ms: u64, random: &[u8]) -> Result<String, UlidError> {
    let random: &[u8; RANDOM_LEN] = random
        .try_into()
        .map_err(|_| UlidError::InvalidInput { len: random.len() })?;

    let ulid = Ulid::try_from_parts(timestamp_ms, *random)?;
    Ok(ascii_string(&ulid.encode_array()))
}

/// Decode a ULID string into its components
///
/// Returns `None` for any malformed input: wrong length, characters outside the
/// alphabet, or a value that does not fit in 128 bits.
pub fn decode(encoded: &str) -> Option<Ulid> {
    try_decode(encoded).ok()
}

/// Decode a ULID string, reporting why decoding failed
///
/// Decoding is case-insensitive and accepts `I`/`L` for `1` and `O` for `0`.
pub fn try_decode(encoded: &str) -> Result<Ulid, DecodeError> {
    if encoded.len() != ENCODED_LEN {
        return Err(DecodeError::InvalidLength { len: encoded.len() });
    }

    let mut acc = [0u8; ACC_LEN];
    for (index, &byte) in encoded.as_bytes().iter().enumerate() {
        let value = DECODE_MAP[byte as usize];
        if value < 0 {
            return Err(DecodeError::InvalidCharacter { byte, index });
        }
        shift_left(&mut acc, BITS_PER_CHAR);
        acc[ACC_LEN - 1] |= value as u8;
    }

    // Only the two prefix bits can land in the top byte, and they must be zero
    if acc[0] != 0 {
        return Err(DecodeError::Overflow);
    }

    let mut bytes = [0u8; ACC_LEN - 1];
    bytes.copy_from_slice(&acc[1..]);
    Ok(Ulid::from_bytes(bytes))
}

/// Shift a big-endian byte buffer left by 1 to 7 bits in place
///
/// Bits shifted out of the first byte are discarded.
pub(crate) fn shift_left(bytes: &mut [u8], bits: u32) {
    debug_assert!(bits > 0 && bits < 8, "shift must be between 1 and 7 bits");

    let mut carry = 0u16;
    for byte in bytes.iter_mut().rev() {
        let shifted = (u16::from(*byte) << bits) | carry;
        *byte = shifted as u8;
        carry = shifted >> 8;
    }
}

#[inline]
pub(crate) fn ascii_string(encoded: &[u8; ENCODED_LEN]) -> String {
    encoded.iter().map(|&b| char::from(b)).collect()
}

/// Errors that can occur during ULID decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is not exactly 26 bytes long
    #[error("ULID must be 26 characters, got {len}")]
    InvalidLength { len: usize },

    /// The input contains a byte outside the accepted alphabet
    #[error("Invalid ULID character 0x{byte:02X} at index {index}")]
    InvalidCharacter { byte: u8, index: usize },

    /// The decoded value does not fit in 128 bits
    #[error("Decoded ULID value overflows 128 bits")]
    Overflow,
}
