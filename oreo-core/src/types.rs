//! The archive dispatch protocol
//!
//! Every value that can travel through an [`Encoder`]/[`Decoder`] pair
//! implements [`Archive`]. Each category of value has one implementation
//! here; user aggregates get theirs from their [`Aggregate`](crate::Aggregate)
//! member list.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::Result;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use bytes::Bytes;

/// A value with a symmetric encode/decode rule
///
/// `decode` overwrites `self` in place. On error `self` may be partially
/// written and should be discarded.
pub trait Archive {
    /// Fewest bytes any encoding of this type occupies
    ///
    /// Used to reject sequence lengths that could not possibly fit in the
    /// remaining input before allocating for them.
    const MIN_ENCODED_LEN: usize;

    /// Append the wire form of `self`
    fn encode(&self, encoder: &mut Encoder);

    /// Replace `self` with a value read from the decoder
    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()>;

    /// Encode a run of values back to back
    #[doc(hidden)]
    fn encode_slice(items: &[Self], encoder: &mut Encoder)
    where
        Self: Sized,
    {
        for item in items {
            item.encode(encoder);
        }
    }

    /// Decode a run of values back to back, stopping at the first failure
    #[doc(hidden)]
    fn decode_slice(items: &mut [Self], decoder: &mut Decoder<'_>) -> Result<()>
    where
        Self: Sized,
    {
        for item in items {
            item.decode(decoder)?;
        }
        Ok(())
    }
}

impl Archive for bool {
    const MIN_ENCODED_LEN: usize = 1;

    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_byte(u8::from(*self));
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        *self = decoder.read_byte()? != 0;
        Ok(())
    }
}

impl Archive for u8 {
    const MIN_ENCODED_LEN: usize = 1;

    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_byte(*self);
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        *self = decoder.read_byte()?;
        Ok(())
    }

    fn encode_slice(items: &[Self], encoder: &mut Encoder) {
        encoder.write_bytes(items);
    }

    fn decode_slice(items: &mut [Self], decoder: &mut Decoder<'_>) -> Result<()> {
        items.copy_from_slice(decoder.read_bytes(items.len())?);
        Ok(())
    }
}

impl Archive for i8 {
    const MIN_ENCODED_LEN: usize = 1;

    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_byte(*self as u8);
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        *self = decoder.read_byte()? as i8;
        Ok(())
    }

    fn encode_slice(items: &[Self], encoder: &mut Encoder) {
        encoder.write_bytes_from(items.iter().map(|&b| b as u8));
    }

    fn decode_slice(items: &mut [Self], decoder: &mut Decoder<'_>) -> Result<()> {
        let bytes = decoder.read_bytes(items.len())?;
        for (dst, &src) in items.iter_mut().zip(bytes) {
            *dst = src as i8;
        }
        Ok(())
    }
}

macro_rules! impl_varint_archive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Archive for $ty {
                const MIN_ENCODED_LEN: usize = 1;

                fn encode(&self, encoder: &mut Encoder) {
                    encoder.write_varint(*self);
                }

                fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
                    *self = decoder.read_varint()?;
                    Ok(())
                }
            }
        )*
    };
}

impl_varint_archive!(u16, u32, u64, i16, i32, i64);

macro_rules! impl_float_archive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Archive for $ty {
                const MIN_ENCODED_LEN: usize = core::mem::size_of::<$ty>();

                fn encode(&self, encoder: &mut Encoder) {
                    encoder.write_bytes(&self.to_ne_bytes());
                }

                fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
                    *self = <$ty>::from_ne_bytes(decoder.read_array()?);
                    Ok(())
                }
            }
        )*
    };
}

impl_float_archive!(f32, f64);

impl Archive for String {
    const MIN_ENCODED_LEN: usize = 1;

    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_length(self.len());
        encoder.write_bytes(self.as_bytes());
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        let max = decoder.limits().max_string_len;
        let len = decoder.read_length(max, 1)?;
        let text = core::str::from_utf8(decoder.read_bytes(len)?)?;
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

impl Archive for Bytes {
    const MIN_ENCODED_LEN: usize = 1;

    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_length(self.len());
        encoder.write_bytes(self);
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        let max = decoder.limits().max_sequence_len;
        let len = decoder.read_length(max, 1)?;
        *self = Bytes::copy_from_slice(decoder.read_bytes(len)?);
        Ok(())
    }
}

impl<T: Archive + Default> Archive for Vec<T> {
    const MIN_ENCODED_LEN: usize = 1;

    fn encode(&self, encoder: &mut Encoder) {
        encoder.write_length(self.len());
        T::encode_slice(self, encoder);
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        let max = decoder.limits().max_sequence_len;
        let len = decoder.read_length(max, T::MIN_ENCODED_LEN)?;
        self.clear();
        self.resize_with(len, T::default);
        T::decode_slice(self, decoder)
    }
}

impl<T: Archive, const N: usize> Archive for [T; N] {
    const MIN_ENCODED_LEN: usize = N * T::MIN_ENCODED_LEN;

    fn encode(&self, encoder: &mut Encoder) {
        T::encode_slice(self, encoder);
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        T::decode_slice(self, decoder)
    }
}

impl<T: Archive + Default> Archive for Option<T> {
    const MIN_ENCODED_LEN: usize = 1;

    fn encode(&self, encoder: &mut Encoder) {
        encoder.process(&self.is_some());
        if let Some(value) = self {
            value.encode(encoder);
        }
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        let mut present = false;
        decoder.process(&mut present)?;
        if present {
            self.insert(T::default()).decode(decoder)
        } else {
            *self = None;
            Ok(())
        }
    }
}

impl<T: Archive> Archive for Box<T> {
    const MIN_ENCODED_LEN: usize = T::MIN_ENCODED_LEN;

    fn encode(&self, encoder: &mut Encoder) {
        (**self).encode(encoder);
    }

    fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
        (**self).decode(decoder)
    }
}

impl Archive for () {
    const MIN_ENCODED_LEN: usize = 0;

    fn encode(&self, _encoder: &mut Encoder) {}

    fn decode(&mut self, _decoder: &mut Decoder<'_>) -> Result<()> {
        Ok(())
    }
}

// Tuples behave like anonymous aggregates: members in order, first failure wins.
macro_rules! impl_tuple_archive {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Archive),+> Archive for ($($name,)+) {
            const MIN_ENCODED_LEN: usize = 0 $(+ $name::MIN_ENCODED_LEN)+;

            fn encode(&self, encoder: &mut Encoder) {
                $(self.$idx.encode(encoder);)+
            }

            fn decode(&mut self, decoder: &mut Decoder<'_>) -> Result<()> {
                $(self.$idx.decode(decoder)?;)+
                Ok(())
            }
        }
    };
}

impl_tuple_archive!(A.0);
impl_tuple_archive!(A.0, B.1);
impl_tuple_archive!(A.0, B.1, C.2);
impl_tuple_archive!(A.0, B.1, C.2, D.3);
impl_tuple_archive!(A.0, B.1, C.2, D.3, E.4);
impl_tuple_archive!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple_archive!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple_archive!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
