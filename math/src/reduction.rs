//! Modular multiplication in GF(2^n).

use crate::error::Result;
use crate::params::FieldParameters;
use crate::poly;
use crate::traits::Word;
use crate::utils::degree;
use crate::utils::is_bit_set;

impl<W: Word> FieldParameters<W> {
    /// Field addition. Identical to subtraction.
    #[inline]
    pub fn add(&self, a: W, b: W) -> W {
        poly::add(a, b)
    }

    /// Full product of two elements, of degree at most `2n - 2`.
    ///
    /// Both operands must be field elements. Bits at or above `n` are not
    /// checked in release builds; use [`Self::checked_multiply_unreduced`]
    /// for untrusted input.
    pub fn multiply_unreduced(&self, a: W, b: W) -> W {
        debug_assert!(self.contains(a) && self.contains(b));
        poly::multiply(a, b)
    }

    /// Blakely reduction of an arbitrary word modulo the field modulus.
    ///
    /// Eliminates every set bit from `degree(c)` down to `n` by XOR-ing the
    /// modulus shifted so that its leading term cancels that bit.
    pub fn reduce_blakely(&self, c: W) -> W {
        let mut residue = c;
        let Some(top) = degree(c) else {
            return residue;
        };
        for i in (self.n..=top).rev() {
            if is_bit_set(residue, i) {
                residue = residue ^ (self.modulus << (i - self.n) as usize);
            }
        }
        residue
    }

    /// `a * b mod modulus` reducing after every partial product, so the
    /// running value never exceeds `n + 1` bits.
    ///
    /// Both operands must be field elements. Only the low `n` bits of `a` are
    /// scanned, so a wider `a` is silently truncated in release builds. Use
    /// [`Self::checked_multiply`] for untrusted input.
    pub fn multiply_reduce_interleaved(&self, a: W, b: W) -> W {
        debug_assert!(self.contains(a) && self.contains(b));
        let mut result = W::ZERO;
        for i in (0..self.n).rev() {
            result = result << 1;
            if is_bit_set(a, i) {
                result = result ^ b;
            }
            if is_bit_set(result, self.n) {
                result = result ^ self.modulus;
            }
        }
        result
    }

    /// [`Self::multiply_unreduced`] that rejects non-elements with
    /// [`FieldError::NotAnElement`](crate::error::FieldError::NotAnElement).
    pub fn checked_multiply_unreduced(&self, a: W, b: W) -> Result<W> {
        Ok(poly::multiply(self.check_element(a)?, self.check_element(b)?))
    }

    /// [`Self::multiply_reduce_interleaved`] that rejects non-elements with
    /// [`FieldError::NotAnElement`](crate::error::FieldError::NotAnElement).
    pub fn checked_multiply(&self, a: W, b: W) -> Result<W> {
        let (a, b) = (self.check_element(a)?, self.check_element(b)?);
        Ok(self.multiply_reduce_interleaved(a, b))
    }

    #[inline]
    pub fn square(&self, a: W) -> W {
        self.multiply_reduce_interleaved(a, a)
    }

    /// Left-to-right square and multiply. `pow(a, 0)` is one, also for zero.
    pub fn pow(&self, a: W, exp: u128) -> W {
        let mut acc = W::ONE;
        let bit_length = u128::BITS - exp.leading_zeros();
        for i in (0..bit_length).rev() {
            acc = self.square(acc);
            if (exp >> i) & 1 == 1 {
                acc = self.multiply_reduce_interleaved(acc, a);
            }
        }
        acc
    }
}

#[cfg(test)]
mod test {
    use itertools::iproduct;
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;
    use crate::error::FieldError;
    use crate::params::StandardField;

    fn toy() -> FieldParameters<u8> {
        FieldParameters::new(3, 0b1011).unwrap()
    }

    fn aes() -> FieldParameters<u16> {
        StandardField::Aes.parameters().unwrap()
    }

    fn gf2_31() -> FieldParameters<u64> {
        StandardField::Gf2_31.parameters().unwrap()
    }

    #[test]
    fn toy_field_products() {
        let field = toy();
        // (x^2 + 1)(x + 1) = x^3 + x^2 + x + 1 = x^2 mod x^3 + x + 1
        assert_eq!(4, field.multiply_reduce_interleaved(5, 3));
        assert_eq!(1, field.multiply_reduce_interleaved(5, 2));
        assert_eq!(3, field.multiply_reduce_interleaved(6, 5));
        assert_eq!(3, field.reduce_blakely(21));
    }

    #[test]
    fn checked_products_reject_non_elements() {
        let field = toy();
        assert_eq!(
            Err(FieldError::NotAnElement { value: 9, n: 3 }),
            field.checked_multiply(9, 1)
        );
        assert_eq!(
            Err(FieldError::NotAnElement { value: 8, n: 3 }),
            field.checked_multiply(1, 8)
        );
        assert_eq!(
            Err(FieldError::NotAnElement { value: 9, n: 3 }),
            field.checked_multiply_unreduced(9, 1)
        );
        assert_eq!(Ok(4), field.checked_multiply(5, 3));
        assert_eq!(Ok(0b1111), field.checked_multiply_unreduced(5, 3));
    }

    #[test]
    fn aes_known_product() {
        assert_eq!(0xc1, aes().multiply_reduce_interleaved(0x57, 0x83));
    }

    #[test]
    fn interleaved_matches_blakely_exhaustively() {
        let field = toy();
        for (a, b) in iproduct!(field.elements(), field.elements()) {
            assert_eq!(
                field.reduce_blakely(field.multiply_unreduced(a, b)),
                field.multiply_reduce_interleaved(a, b),
                "{a:#x} * {b:#x}"
            );
        }
        let field = aes();
        for (a, b) in iproduct!(field.elements(), field.elements()) {
            assert_eq!(
                field.reduce_blakely(field.multiply_unreduced(a, b)),
                field.multiply_reduce_interleaved(a, b)
            );
        }
    }

    #[proptest]
    fn interleaved_matches_blakely(
        #[strategy(0u64..1 << 31)] a: u64,
        #[strategy(0u64..1 << 31)] b: u64,
    ) {
        let field = gf2_31();
        prop_assert_eq!(
            field.reduce_blakely(field.multiply_unreduced(a, b)),
            field.multiply_reduce_interleaved(a, b)
        );
    }

    #[test]
    fn blakely_leaves_reduced_values_alone() {
        let field = aes();
        for value in field.elements() {
            assert_eq!(value, field.reduce_blakely(value));
        }
        assert_eq!(0, field.reduce_blakely(0x11b));
    }

    #[proptest]
    fn blakely_agrees_with_long_division(value: u64) {
        let field = gf2_31();
        prop_assert_eq!(
            poly::divide(value, field.modulus()).unwrap().remainder,
            field.reduce_blakely(value)
        );
    }

    #[proptest]
    fn products_stay_in_the_field(
        #[strategy(0u64..1 << 31)] a: u64,
        #[strategy(0u64..1 << 31)] b: u64,
    ) {
        let field = gf2_31();
        prop_assert!(field.contains(field.multiply_reduce_interleaved(a, b)));
        prop_assert!(field.contains(field.add(a, b)));
    }

    #[proptest]
    fn one_is_neutral_element_for_multiplication(#[strategy(0u16..256)] a: u16) {
        prop_assert_eq!(a, aes().multiply_reduce_interleaved(a, 1));
        prop_assert_eq!(0, aes().multiply_reduce_interleaved(a, 0));
    }

    #[proptest]
    fn multiplication_is_associative(
        #[strategy(0u64..1 << 31)] a: u64,
        #[strategy(0u64..1 << 31)] b: u64,
        #[strategy(0u64..1 << 31)] c: u64,
    ) {
        let field = gf2_31();
        let mul = |x, y| field.multiply_reduce_interleaved(x, y);
        prop_assert_eq!(mul(mul(a, b), c), mul(a, mul(b, c)));
    }

    #[test]
    fn pow_small_exponents() {
        let field = toy();
        assert_eq!(1, field.pow(0, 0));
        assert_eq!(0, field.pow(0, 5));
        assert_eq!(5, field.pow(5, 1));
        assert_eq!(field.square(5), field.pow(5, 2));
        // The multiplicative group of GF(8) has order 7.
        for a in 1..8 {
            assert_eq!(1, field.pow(a, 7));
        }
    }

    #[proptest]
    fn frobenius_fixes_every_element(#[strategy(0u64..1 << 31)] a: u64) {
        let field = gf2_31();
        prop_assert_eq!(a, field.pow(a, 1u128 << 31));
    }
}
