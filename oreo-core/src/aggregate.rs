//! Member visitors for user aggregates
//!
//! An aggregate lists its members once, in [`Aggregate::visit`]. Encoding and
//! decoding both walk that one list through a [`Visitor`], so the two
//! directions cannot disagree on order.
//!
//! A member is named by a [`Member`], a pair of accessors built with
//! [`member!`](crate::member). The encoding visitor reads through the shared
//! accessor and the decoding visitor writes through the mutable one.
//!
//! ```
//! use oreo_core::{archive_aggregate, from_bytes, member, to_bytes, Aggregate, Archive, Visitor};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tagged<T> {
//!     tag: u16,
//!     value: T,
//! }
//!
//! impl<T: Archive> Aggregate for Tagged<T> {
//!     const MIN_ENCODED_LEN: usize = u16::MIN_ENCODED_LEN + T::MIN_ENCODED_LEN;
//!
//!     fn visit<V: Visitor<Self>>(visitor: &mut V) -> oreo_core::Result<()> {
//!         visitor.visit(member!(tag))?;
//!         visitor.visit(member!(value))
//!     }
//! }
//!
//! archive_aggregate!([T: Archive] Tagged<T>);
//!
//! let value = Tagged { tag: 7, value: String::from("x") };
//! assert_eq!(to_bytes(&value).as_ref(), &[7, 1, b'x']);
//! assert_eq!(from_bytes::<Tagged<String>>(&to_bytes(&value))?, value);
//! # Ok::<(), oreo_core::DecodeError>(())
//! ```

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::types::Archive;
use crate::Result;

/// Accessors for one member of an aggregate `S`
pub struct Member<S, T> {
    get: fn(&S) -> &T,
    get_mut: fn(&mut S) -> &mut T,
}

impl<S, T> Member<S, T> {
    /// Name a member by its shared and mutable accessors
    pub const fn new(get: fn(&S) -> &T, get_mut: fn(&mut S) -> &mut T) -> Self {
        Self { get, get_mut }
    }

    /// Borrow the member out of `this`
    pub fn get<'a>(&self, this: &'a S) -> &'a T {
        (self.get)(this)
    }

    /// Mutably borrow the member out of `this`
    pub fn get_mut<'a>(&self, this: &'a mut S) -> &'a mut T {
        (self.get_mut)(this)
    }
}

impl<S, T> Clone for Member<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for Member<S, T> {}

/// Callback invoked once per aggregate member, in declaration order
pub trait Visitor<S> {
    /// Handle one member; an error stops the walk
    fn visit<T: Archive>(&mut self, member: Member<S, T>) -> Result<()>;
}

/// A user type made of an ordered, fixed list of archived members
pub trait Aggregate: Sized {
    /// Fewest bytes any encoding occupies, normally the sum over the members
    ///
    /// Zero is always a safe answer; a tighter bound lets sequences of this
    /// type reject corrupt lengths sooner.
    const MIN_ENCODED_LEN: usize = 0;

    /// Pass every member to `visitor`, in the same order every time
    fn visit<V: Visitor<Self>>(visitor: &mut V) -> Result<()>;
}

struct EncodeMembers<'a, 'e, S> {
    this: &'a S,
    encoder: &'e mut Encoder,
}

impl<S> Visitor<S> for EncodeMembers<'_, '_, S> {
    fn visit<T: Archive>(&mut self, member: Member<S, T>) -> Result<()> {
        member.get(self.this).encode(self.encoder);
        Ok(())
    }
}

struct DecodeMembers<'a, 'd, 'b, S> {
    this: &'a mut S,
    decoder: &'d mut Decoder<'b>,
}

impl<S> Visitor<S> for DecodeMembers<'_, '_, '_, S> {
    fn visit<T: Archive>(&mut self, member: Member<S, T>) -> Result<()> {
        member.get_mut(self.this).decode(self.decoder)
    }
}

/// Encode every member of `this` in order
pub fn encode_members<S: Aggregate>(this: &S, encoder: &mut Encoder) {
    let mut visitor = EncodeMembers { this, encoder };
    // The encoding visitor never returns an error
    let _ = S::visit(&mut visitor);
}

/// Decode every member of `this` in order, stopping at the first failure
pub fn decode_members<S: Aggregate>(this: &mut S, decoder: &mut Decoder<'_>) -> Result<()> {
    let mut visitor = DecodeMembers { this, decoder };
    S::visit(&mut visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::{from_bytes, to_bytes};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Debug, Default, PartialEq)]
    struct Pair<A, B>(A, B);

    impl<A: Archive, B: Archive> Aggregate for Pair<A, B> {
        const MIN_ENCODED_LEN: usize = A::MIN_ENCODED_LEN + B::MIN_ENCODED_LEN;

        fn visit<V: Visitor<Self>>(visitor: &mut V) -> Result<()> {
            visitor.visit(crate::member!(0))?;
            visitor.visit(crate::member!(1))
        }
    }

    crate::archive_aggregate!([A: Archive, B: Archive] Pair<A, B>);

    #[derive(Debug, Default, PartialEq)]
    struct Reading {
        sensor: String,
        values: Vec<Pair<u8, f32>>,
    }

    impl Aggregate for Reading {
        fn visit<V: Visitor<Self>>(visitor: &mut V) -> Result<()> {
            visitor.visit(crate::member!(sensor))?;
            visitor.visit(crate::member!(values))
        }
    }

    crate::archive_aggregate!(Reading);

    /// Records how many members a walk touched
    struct CountMembers(usize);

    impl<S> Visitor<S> for CountMembers {
        fn visit<T: Archive>(&mut self, _member: Member<S, T>) -> Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    #[test]
    fn test_generic_tuple_struct_aggregate() {
        let pair = Pair(300u16, String::from("ab"));
        let bytes = to_bytes(&pair);
        assert_eq!(bytes.as_ref(), &[172, 2, 2, b'a', b'b']);
        assert_eq!(from_bytes::<Pair<u16, String>>(&bytes).unwrap(), pair);
        assert_eq!(<Pair<u16, String> as Archive>::MIN_ENCODED_LEN, 2);
    }

    #[test]
    fn test_nested_manual_aggregate_round_trip() {
        let reading = Reading {
            sensor: String::from("t0"),
            values: vec![Pair(1, 0.5), Pair(2, -1.25)],
        };
        let bytes = to_bytes(&reading);
        assert_eq!(from_bytes::<Reading>(&bytes).unwrap(), reading);
        assert_eq!(<Reading as Archive>::MIN_ENCODED_LEN, 0);
    }

    #[test]
    fn test_decode_stops_at_first_failing_member() {
        // First member decodes, second runs out of input
        let mut pair = Pair(0u8, 9u32);
        let err = crate::Decoder::new(&[5]).process(&mut pair).unwrap_err();
        assert_eq!(err, DecodeError::truncated(1, 0));
        assert_eq!(pair, Pair(5, 9));
    }

    #[test]
    fn test_visitor_sees_every_member() {
        let mut counter = CountMembers(0);
        Pair::<u8, u8>::visit(&mut counter).unwrap();
        assert_eq!(counter.0, 2);

        let mut counter = CountMembers(0);
        Reading::visit(&mut counter).unwrap();
        assert_eq!(counter.0, 2);
    }
}
