//! Bounded, forward-only read cursor over a borrowed byte range

use crate::error::DecodeError;
use crate::Result;

/// Read position inside a caller-owned byte range
///
/// Every read is a checked sub-range of the underlying slice. A read that
/// does not fit fails with [`DecodeError::TruncatedInput`] and leaves the
/// position untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `data`
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the end bound
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether the end bound has been reached
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread tail of the range
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Read one byte
    pub fn read_byte(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Read exactly `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self
            .pos
            .checked_add(len)
            .and_then(|end| self.data.get(self.pos..end))
            .ok_or_else(|| DecodeError::truncated(len, self.remaining()))?;
        self.pos += len;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_byte().unwrap(), 1);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[2, 3]);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.rest(), &[4, 5]);
    }

    #[test]
    fn test_short_read_does_not_advance() {
        let data = [1u8, 2, 3];
        let mut cursor = Cursor::new(&data);
        cursor.read_byte().unwrap();

        let err = cursor.read_array::<4>().unwrap_err();
        assert_eq!(err, DecodeError::truncated(4, 2));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_huge_length_is_rejected() {
        let data = [0u8; 2];
        let mut cursor = Cursor::new(&data);
        cursor.read_byte().unwrap();

        assert!(matches!(
            cursor.read_bytes(usize::MAX),
            Err(DecodeError::TruncatedInput { .. })
        ));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_empty_range() {
        let mut cursor = Cursor::new(&[]);
        assert!(cursor.is_empty());
        assert!(cursor.read_byte().is_err());
        assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
    }
}
