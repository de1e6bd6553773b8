//! Degree and bit helpers shared by every arithmetic layer.

use crate::traits::Word;

/// Index of the highest set bit, i.e. the degree of the polynomial encoded by
/// `value`.
///
/// The zero polynomial has no degree and yields `None`. Callers must handle
/// that case before deriving any shift amount from the result.
#[inline]
pub fn degree<W: Word>(value: W) -> Option<u32> {
    if value.is_zero() {
        None
    } else {
        Some(W::BITS - 1 - value.leading_zeros())
    }
}

/// Mask with the low `width` bits set. Saturates to all ones.
#[inline]
pub fn low_mask<W: Word>(width: u32) -> W {
    if width >= W::BITS {
        W::max_value()
    } else {
        (W::ONE << width as usize) - W::ONE
    }
}

/// Coefficient of `x^position`. Positions past the word width read as zero.
#[inline]
pub fn is_bit_set<W: Word>(value: W, position: u32) -> bool {
    position < W::BITS && !((value >> position as usize) & W::ONE).is_zero()
}
