//! Constants and decode limits for the Oreo wire format

use serde::{Deserialize, Serialize};

/// Maximum accepted string length in bytes (1 GiB)
pub const MAX_STRING_LENGTH: u32 = 1 << 30;

/// Maximum accepted element count for a dynamic sequence (1 GiB)
pub const MAX_SEQUENCE_LENGTH: u32 = 1 << 30;

/// Presence byte written before an absent optional value
pub const ABSENT: u8 = 0;

/// Presence byte written before a present optional value
pub const PRESENT: u8 = 1;

/// Continuation bit of a varint group
pub const VARINT_CONTINUATION: u8 = 0b1000_0000;

/// Payload mask of a varint group
pub const VARINT_PAYLOAD: u8 = 0b0111_1111;

/// Number of varint groups a value of `bits` width may occupy.
///
/// This is `ceil((bits + 1) / 7)`: 3 groups for 16-bit, 5 for 32-bit and
/// 10 for 64-bit integers. A stream that needs more is rejected as corrupt.
pub const fn varint_max_groups(bits: u32) -> usize {
    ((bits + 1 + 6) / 7) as usize
}

/// Caps applied while decoding length-prefixed values
///
/// Lengths are checked against these limits and against the bytes left in the
/// input before anything is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest string, in bytes
    pub max_string_len: u32,

    /// Largest dynamic sequence, in elements
    pub max_sequence_len: u32,
}

impl Limits {
    /// Create limits with explicit caps
    pub const fn new(max_string_len: u32, max_sequence_len: u32) -> Self {
        Self {
            max_string_len,
            max_sequence_len,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(MAX_STRING_LENGTH, MAX_SEQUENCE_LENGTH)
    }
}
