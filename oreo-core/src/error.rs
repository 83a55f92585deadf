//! Error types for Oreo decoding
//!
//! Encoding never fails, so every variant here describes a way a byte range
//! can fail to describe a value of the requested type.

/// Errors that can occur while decoding an archive
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes remain than a primitive or fixed-size block requires
    #[cfg_attr(
        feature = "std",
        error("Truncated input: needed {needed} bytes, {remaining} remaining")
    )]
    TruncatedInput {
        /// The number of bytes the step required.
        needed: usize,
        /// The number of bytes left in the cursor region.
        remaining: usize,
    },

    /// A decoded length exceeds the configured maximum or the remaining input
    #[cfg_attr(feature = "std", error("Length {length} exceeds limit {limit}"))]
    LengthOverflow {
        /// The length read from the stream.
        length: u32,
        /// The largest length that would have been accepted.
        limit: u64,
    },

    /// A varint used more groups than its target type can justify
    #[cfg_attr(
        feature = "std",
        error("Oversized varint: more than {max_groups} groups for target type")
    )]
    OversizedVarint {
        /// The group budget for the target type.
        max_groups: usize,
    },

    /// String payload is not valid UTF-8
    #[cfg_attr(feature = "std", error("String payload is not valid UTF-8"))]
    InvalidUtf8,

    /// Enum discriminant does not name any variant
    #[cfg_attr(feature = "std", error("Unknown enum discriminant: {0}"))]
    UnknownDiscriminant(i64),
}

impl DecodeError {
    /// Build a truncation error for a step needing `needed` bytes
    pub(crate) const fn truncated(needed: usize, remaining: usize) -> Self {
        DecodeError::TruncatedInput { needed, remaining }
    }
}

impl From<core::str::Utf8Error> for DecodeError {
    fn from(_: core::str::Utf8Error) -> Self {
        DecodeError::InvalidUtf8
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DecodeError::truncated(4, 1);
        assert_eq!(err.to_string(), "Truncated input: needed 4 bytes, 1 remaining");

        let err = DecodeError::LengthOverflow {
            length: 9000,
            limit: 12,
        };
        assert_eq!(err.to_string(), "Length 9000 exceeds limit 12");
    }
}
