use std::fmt::Binary;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::LowerHex;
use std::fmt::UpperHex;
use std::hash::Hash;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::PrimInt;
use num_traits::Unsigned;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Machine word that stores field elements, the modulus and unreduced
/// products of one field.
///
/// A field of degree `n` can only be built on a word holding at least
/// `max(2n - 1, n + 1)` bits; see
/// [`FieldParameters::new`](crate::params::FieldParameters::new).
pub trait Word:
    PrimInt
    + Unsigned
    + ConstZero
    + ConstOne
    + Default
    + Hash
    + Debug
    + Display
    + LowerHex
    + UpperHex
    + Binary
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Width of the word in bits.
    const BITS: u32;

    /// Lossless conversion used for error reporting.
    fn widen(self) -> u128;
}

macro_rules! impl_word_for_unsigned_int {
    ($($t:ident),+ $(,)?) => {$(
        impl Word for $t {
            const BITS: u32 = $t::BITS;

            #[inline]
            fn widen(self) -> u128 {
                u128::from(self)
            }
        }
    )+};
}

impl_word_for_unsigned_int!(u8, u16, u32, u64, u128);
