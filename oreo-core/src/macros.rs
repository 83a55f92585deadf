//! Declarative helpers for user types
//!
//! [`aggregate!`] is shorthand for a struct plus its [`Aggregate`](crate::Aggregate)
//! member list. [`archive_aggregate!`] puts any aggregate, generic or not, on
//! the archive protocol, and [`member!`] names a member inside
//! [`Aggregate::visit`](crate::Aggregate::visit).

/// Name a member of `Self` for an aggregate visitor
///
/// Accepts a field name or a tuple index.
#[macro_export]
macro_rules! member {
    ($field:tt) => {
        $crate::Member::<Self, _>::new(|this| &this.$field, |this| &mut this.$field)
    };
}

/// Implement [`Archive`](crate::Archive) for a type through its
/// [`Aggregate`](crate::Aggregate) member list
///
/// Generic parameters go in leading brackets:
/// `archive_aggregate!([T: Archive] Wrapper<T>)`.
#[macro_export]
macro_rules! archive_aggregate {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> $crate::Archive for $ty {
            const MIN_ENCODED_LEN: usize = <Self as $crate::Aggregate>::MIN_ENCODED_LEN;

            fn encode(&self, encoder: &mut $crate::Encoder) {
                $crate::aggregate::encode_members(self, encoder)
            }

            fn decode(&mut self, decoder: &mut $crate::Decoder<'_>) -> $crate::Result<()> {
                $crate::aggregate::decode_members(self, decoder)
            }
        }
    };
    ($ty:ty) => {
        $crate::archive_aggregate!([] $ty);
    };
}

/// Declare a struct together with its archive member order
///
/// Members are encoded and decoded in declaration order.
///
/// ```
/// use oreo_core::{aggregate, from_bytes, to_bytes};
///
/// aggregate! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Point {
///         pub x: i32,
///         pub y: i32,
///         pub label: String,
///     }
/// }
///
/// let p = Point { x: -1, y: 300, label: "origin".into() };
/// let bytes = to_bytes(&p);
/// assert_eq!(from_bytes::<Point>(&bytes)?, p);
/// # Ok::<(), oreo_core::DecodeError>(())
/// ```
#[macro_export]
macro_rules! aggregate {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Aggregate for $name {
            const MIN_ENCODED_LEN: usize = 0 $(+ <$ty as $crate::Archive>::MIN_ENCODED_LEN)*;

            #[allow(unused_variables)]
            fn visit<V: $crate::Visitor<Self>>(visitor: &mut V) -> $crate::Result<()> {
                $(visitor.visit($crate::member!($field))?;)*
                Ok(())
            }
        }

        $crate::archive_aggregate!($name);
    };
}

/// Declare a C-like enum carried as its integer representation
///
/// A one-byte `repr` travels as a raw byte, wider ones as varints. Decoding a
/// value that names no variant fails with
/// [`DecodeError::UnknownDiscriminant`](crate::DecodeError::UnknownDiscriminant).
///
/// ```
/// use oreo_core::{archive_enum, from_bytes, to_bytes};
///
/// archive_enum! {
///     #[derive(Debug, Default, PartialEq)]
///     pub enum Level: u16 {
///         #[default]
///         Low = 1,
///         High = 1000,
///     }
/// }
///
/// let bytes = to_bytes(&Level::High);
/// assert_eq!(bytes.as_ref(), &[232, 7]);
/// assert_eq!(from_bytes::<Level>(&bytes)?, Level::High);
/// # Ok::<(), oreo_core::DecodeError>(())
/// ```
#[macro_export]
macro_rules! archive_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl $crate::Archive for $name {
            const MIN_ENCODED_LEN: usize = <$repr as $crate::Archive>::MIN_ENCODED_LEN;

            fn encode(&self, encoder: &mut $crate::Encoder) {
                let raw: $repr = match self {
                    $($name::$variant => $value,)*
                };
                encoder.process(&raw);
            }

            fn decode(&mut self, decoder: &mut $crate::Decoder<'_>) -> $crate::Result<()> {
                let mut raw: $repr = 0;
                decoder.process(&mut raw)?;
                $(
                    if raw == $value {
                        *self = $name::$variant;
                        return Ok(());
                    }
                )*
                Err($crate::DecodeError::UnknownDiscriminant(raw as i64))
            }
        }
    };
}
