//! Variable-length integer codec
//!
//! Integers two bytes or wider are written as little-endian groups of 7 bits.
//! The high bit of each byte is set when another group follows. Signed values
//! are written as the unsigned bit pattern of the same width, so `-1i16`
//! occupies three bytes and `-1i64` ten.

use crate::constants::{varint_max_groups, VARINT_CONTINUATION, VARINT_PAYLOAD};
use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::Result;
use bytes::BufMut;

/// Integer types carried as varints
pub trait VarInt: Copy {
    /// Width of the type in bits
    const BITS: u32;

    /// Most groups a valid encoding may use
    const MAX_GROUPS: usize = varint_max_groups(Self::BITS);

    /// Unsigned bit pattern, zero-extended to 64 bits
    fn to_bits(self) -> u64;

    /// Rebuild from a bit pattern, discarding bits above [`Self::BITS`]
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_varint {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl VarInt for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn to_bits(self) -> u64 {
                    self as $unsigned as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $unsigned as $ty
                }
            }
        )*
    };
}

impl_varint! {
    u16 => u16,
    u32 => u32,
    u64 => u64,
    i16 => u16,
    i32 => u32,
    i64 => u64,
}

/// Append the varint encoding of `value` to `buf`
pub fn encode<T: VarInt, B: BufMut>(buf: &mut B, value: T) {
    let mut bits = value.to_bits();
    while bits >= u64::from(VARINT_CONTINUATION) {
        buf.put_u8(bits as u8 | VARINT_CONTINUATION);
        bits >>= 7;
    }
    buf.put_u8(bits as u8);
}

/// Number of bytes [`encode`] writes for `value`
pub fn encoded_len<T: VarInt>(value: T) -> usize {
    let significant = 64 - value.to_bits().leading_zeros() as usize;
    significant.max(1).div_ceil(7)
}

/// Read a varint for `T` from the cursor
///
/// Fails with [`DecodeError::TruncatedInput`] if the range ends before a
/// terminating group, and with [`DecodeError::OversizedVarint`] if another
/// group would exceed [`VarInt::MAX_GROUPS`].
pub fn decode<T: VarInt>(cursor: &mut Cursor<'_>) -> Result<T> {
    let mut bits = 0u64;
    let mut groups = 0usize;

    loop {
        if cursor.is_empty() {
            return Err(DecodeError::truncated(1, 0));
        }
        if groups >= T::MAX_GROUPS {
            return Err(DecodeError::OversizedVarint {
                max_groups: T::MAX_GROUPS,
            });
        }

        let byte = cursor.read_byte()?;
        bits |= u64::from(byte & VARINT_PAYLOAD) << (7 * groups);
        groups += 1;

        if byte & VARINT_CONTINUATION == 0 {
            return Ok(T::from_bits(bits));
        }
    }
}
