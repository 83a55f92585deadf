//! Archive decoding
//!
//! The [`Decoder`] borrows a caller-owned byte range and fills in values passed
//! to [`Decoder::process`]. Every step is checked against the end of the range
//! before it reads. The first failure ends the session: the cursor stays where
//! the failing step stopped and the target value is left partially written.

use crate::constants::Limits;
use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::types::Archive;
use crate::varint::{self, VarInt};
use crate::Result;
#[cfg(feature = "logging")]
use tracing::debug;

/// Deserializing side of an archive session
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
    limits: Limits,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over `data` with default [`Limits`]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limits(data, Limits::default())
    }

    /// Create a decoder over `data` with custom limits
    pub fn with_limits(data: &'a [u8], limits: Limits) -> Self {
        Self {
            cursor: Cursor::new(data),
            limits,
        }
    }

    /// Decode into `value` and return the decoder for chaining
    ///
    /// ```
    /// use oreo_core::Decoder;
    ///
    /// let data = [7, 172, 2, 1];
    /// let (mut a, mut b, mut c) = (0u8, 0u32, false);
    /// Decoder::new(&data)
    ///     .process(&mut a)?
    ///     .process(&mut b)?
    ///     .process(&mut c)?;
    /// assert_eq!((a, b, c), (7, 300, true));
    /// # Ok::<(), oreo_core::DecodeError>(())
    /// ```
    pub fn process<T: Archive>(&mut self, value: &mut T) -> Result<&mut Self> {
        value.decode(self)?;
        Ok(self)
    }

    /// Limits applied to length prefixes
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Bytes left in the range
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Whether the whole range has been consumed
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// The unread tail of the range
    pub fn rest(&self) -> &'a [u8] {
        self.cursor.rest()
    }

    /// Read one raw byte
    pub fn read_byte(&mut self) -> Result<u8> {
        self.cursor.read_byte()
    }

    /// Read `len` raw bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.cursor.read_bytes(len)
    }

    /// Read `N` raw bytes into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.cursor.read_array()
    }

    /// Read a varint
    pub fn read_varint<T: VarInt>(&mut self) -> Result<T> {
        varint::decode(&mut self.cursor)
    }

    /// Read and validate a `u32` length prefix
    ///
    /// The length is rejected with [`DecodeError::LengthOverflow`] when it is
    /// above `max`, or when `length * min_element_len` is more than the bytes
    /// remaining. Elements are charged at least one byte each, so a run of
    /// zero-width elements can be no longer than the input left. Callers
    /// allocate only after this returns.
    pub fn read_length(&mut self, max: u32, min_element_len: usize) -> Result<usize> {
        let min_element_len = min_element_len.max(1);
        let length: u32 = self.read_varint()?;

        if length > max {
            #[cfg(feature = "logging")]
            debug!("Length {} above limit {} at offset {}", length, max, self.position());
            return Err(DecodeError::LengthOverflow {
                length,
                limit: u64::from(max),
            });
        }

        let remaining = self.remaining();
        let fits = (length as usize)
            .checked_mul(min_element_len)
            .is_some_and(|needed| needed <= remaining);
        if !fits {
            #[cfg(feature = "logging")]
            debug!(
                "Length {} needs more than the {} bytes left at offset {}",
                length,
                remaining,
                self.position()
            );
            return Err(DecodeError::LengthOverflow {
                length,
                limit: (remaining / min_element_len) as u64,
            });
        }

        Ok(length as usize)
    }
}
