//! # Oreo Core
//!
//! A compact, schema-less binary archive: an [`Encoder`]/[`Decoder`] pair that
//! turns strongly typed values into a flat byte buffer and back.
//!
//! ## Modules
//!
//! - `constants`: Wire constants and decode [`Limits`]
//! - `types`: The [`Archive`] dispatch trait and its implementations
//! - `encoder`: Infallible encoding into an owned buffer
//! - `decoder`: Bounds-checked, fallible decoding from a borrowed range
//! - `cursor`: Forward-only bounded read cursor
//! - `varint`: 7-bit group integer codec
//! - `aggregate`: The [`Aggregate`] member-visitor protocol for user types
//! - `macros`: [`aggregate!`], [`archive_aggregate!`], [`member!`] and
//!   [`archive_enum!`]
//!
//! ## Wire format
//!
//! | Kind | Bytes |
//! |---|---|
//! | `bool` | 1 byte, 0 or 1 |
//! | `u8`, `i8` | raw byte |
//! | `u16`..`i64` | varint of the unsigned bit pattern |
//! | `f32`, `f64` | raw native-order bytes |
//! | `String`, `Bytes` | varint `u32` length, then bytes |
//! | `Vec<T>` | varint `u32` length, then elements |
//! | `[T; N]` | `N` elements, no prefix |
//! | `Option<T>` | presence byte, then `T` if present |
//! | aggregate / tuple | members in declaration order |
//!
//! There is no header or version field; both ends must agree on the types.
//!
//! ```
//! use oreo_core::{Decoder, Encoder};
//!
//! let mut encoder = Encoder::new();
//! encoder.process(&(String::from("abc"), vec![1u16, 2, 3], Some(1.5f32)));
//! let bytes = encoder.into_bytes();
//!
//! let mut value = (String::new(), Vec::<u16>::new(), None::<f32>);
//! Decoder::new(&bytes).process(&mut value)?;
//! assert_eq!(value.0, "abc");
//! # Ok::<(), oreo_core::DecodeError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod aggregate;
pub mod constants;
pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod error;
mod macros;
pub mod types;
pub mod varint;

// Re-export commonly used types
pub use aggregate::{Aggregate, Member, Visitor};
pub use constants::Limits;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::DecodeError;
pub use types::Archive;

use alloc::vec::Vec;
use bytes::Bytes;
#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Result type alias for Oreo decode operations
pub type Result<T> = core::result::Result<T, DecodeError>;

/// Encode a single value into a fresh buffer
pub fn to_bytes<T: Archive>(value: &T) -> Bytes {
    let mut encoder = Encoder::new();
    encoder.process(value);

    #[cfg(feature = "logging")]
    trace!("Encoded {} bytes", encoder.len());

    encoder.into_bytes()
}

/// Encode a single value into a `Vec<u8>`
pub fn to_vec<T: Archive>(value: &T) -> Vec<u8> {
    to_bytes(value).into()
}

/// Decode a value of type `T` from the start of `data`
///
/// Bytes after the value are ignored; use a [`Decoder`] directly to inspect
/// them.
pub fn from_bytes<T: Archive + Default>(data: &[u8]) -> Result<T> {
    from_bytes_with_limits(data, Limits::default())
}

/// Decode a value of type `T` with custom length limits
pub fn from_bytes_with_limits<T: Archive + Default>(data: &[u8], limits: Limits) -> Result<T> {
    let mut value = T::default();
    let mut decoder = Decoder::with_limits(data, limits);

    let outcome = decoder.process(&mut value).map(|_| ());
    match outcome {
        Ok(()) => {
            #[cfg(feature = "logging")]
            trace!(
                "Decoded {} of {} bytes",
                decoder.position(),
                data.len()
            );
            Ok(value)
        }
        Err(e) => {
            #[cfg(feature = "logging")]
            debug!(
                "Decode failed at offset {} of {}: {:?}",
                decoder.position(),
                data.len(),
                e
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_to_vec_matches_to_bytes() {
        let value = vec![String::from("a"), String::from("bc")];
        assert_eq!(to_vec(&value), to_bytes(&value).as_ref());
    }

    #[test]
    fn test_from_bytes_ignores_trailing() {
        assert_eq!(from_bytes::<u8>(&[9, 9, 9]).unwrap(), 9);
    }

    #[test]
    fn test_from_bytes_with_limits() {
        let bytes = to_bytes(&vec![0u8; 16]);
        assert!(from_bytes_with_limits::<Vec<u8>>(&bytes, Limits::new(16, 15)).is_err());
        assert!(from_bytes_with_limits::<Vec<u8>>(&bytes, Limits::new(0, 16)).is_ok());
    }
}
