//! Archive encoding
//!
//! The [`Encoder`] owns a growing [`BytesMut`] and appends the wire form of
//! every value passed to [`Encoder::process`]. Encoding cannot fail.

use crate::types::Archive;
use crate::varint::{self, VarInt};
use bytes::{BufMut, Bytes, BytesMut};

/// Serializing side of an archive session
#[derive(Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    /// Create an encoder with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Create an encoder that appends to an existing buffer
    pub fn from_buffer(buf: BytesMut) -> Self {
        Self { buf }
    }

    /// Encode `value` and return the encoder for chaining
    ///
    /// ```
    /// use oreo_core::Encoder;
    ///
    /// let mut encoder = Encoder::new();
    /// encoder.process(&7u8).process(&300u32).process(&true);
    /// assert_eq!(encoder.as_bytes(), &[7, 172, 2, 1]);
    /// ```
    pub fn process<T: Archive>(&mut self, value: &T) -> &mut Self {
        value.encode(self);
        self
    }

    /// Append a single raw byte
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.put_u8(byte);
    }

    /// Append raw bytes with no prefix
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Append raw bytes produced by an iterator
    pub fn write_bytes_from<I: IntoIterator<Item = u8>>(&mut self, bytes: I) {
        self.buf.extend(bytes);
    }

    /// Append a varint
    pub fn write_varint<T: VarInt>(&mut self, value: T) {
        varint::encode(&mut self.buf, value);
    }

    /// Append a length prefix as a `u32` varint
    ///
    /// # Panics
    ///
    /// Panics if `len` does not fit in a `u32`; such values have no wire form.
    pub fn write_length(&mut self, len: usize) {
        assert!(
            len <= u32::MAX as usize,
            "length {len} exceeds the u32 length prefix"
        );
        self.write_varint(len as u32);
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Hand the buffer to the caller as immutable [`Bytes`]
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    /// Hand the buffer to the caller as a mutable [`BytesMut`]
    pub fn into_inner(self) -> BytesMut {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_encode_primitives() {
        let mut encoder = Encoder::new();
        encoder
            .process(&true)
            .process(&false)
            .process(&-2i8)
            .process(&0xabu8)
            .process(&128u16);

        assert_eq!(encoder.as_bytes(), &[1, 0, 0xfe, 0xab, 128, 1]);
    }

    #[test]
    fn test_encode_float_native_order() {
        let mut encoder = Encoder::new();
        encoder.process(&1.5f32);
        assert_eq!(encoder.as_bytes(), &1.5f32.to_ne_bytes());
    }

    #[test]
    fn test_encode_string_is_length_prefixed() {
        let mut encoder = Encoder::new();
        encoder.process(&String::from("abc"));
        assert_eq!(encoder.as_bytes(), &[3, b'a', b'b', b'c']);
    }

    #[test]
    fn test_encode_sequence_and_array() {
        let mut encoder = Encoder::new();
        encoder.process(&vec![1u8, 2, 3]).process(&[300u32, 1]);
        assert_eq!(encoder.as_bytes(), &[3, 1, 2, 3, 172, 2, 1]);
    }

    #[test]
    fn test_encode_optional() {
        let mut encoder = Encoder::new();
        encoder.process(&Some(66u32)).process(&None::<u32>);
        assert_eq!(encoder.as_bytes(), &[1, 66, 0]);
    }

    #[test]
    fn test_from_buffer_appends() {
        let mut buf = BytesMut::new();
        buf.put_slice(b"hdr");

        let mut encoder = Encoder::from_buffer(buf);
        encoder.process(&1u8);

        assert_eq!(encoder.len(), 4);
        assert_eq!(encoder.into_bytes().as_ref(), b"hdr\x01");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let value = (String::from("same"), vec![1u64, 2, 3], Some(-5i32));

        let mut first = Encoder::new();
        first.process(&value);
        let mut second = Encoder::new();
        second.process(&value);

        assert_eq!(first.into_bytes(), second.into_bytes());
    }
}
