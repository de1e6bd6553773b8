//! Arithmetic on polynomials over GF(2) packed into a single word.
//!
//! Nothing here reduces modulo a field modulus; see
//! [`reduction`](crate::reduction) for that. Bit `i` of a word is the
//! coefficient of `x^i`.

use crate::error::FieldError;
use crate::error::Result;
use crate::traits::Word;
use crate::utils::degree;
use crate::utils::is_bit_set;

/// Quotient and remainder of polynomial long division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DivRem<W> {
    pub quotient: W,
    pub remainder: W,
}

/// Sum (and difference) of two polynomials.
#[inline]
pub fn add<W: Word>(a: W, b: W) -> W {
    a ^ b
}

/// Carry-less schoolbook product.
///
/// Scans the set bits of `a` from its degree down to zero, XOR-ing `b << i`
/// into the accumulator. Requires `deg(a) + deg(b) < W::BITS`.
pub fn multiply<W: Word>(a: W, b: W) -> W {
    let mut product = W::ZERO;
    let (Some(top), Some(b_degree)) = (degree(a), degree(b)) else {
        return product;
    };
    debug_assert!(
        top + b_degree < W::BITS,
        "product of degree {} overflows a {}-bit word",
        top + b_degree,
        W::BITS
    );
    for i in (0..=top).rev() {
        if is_bit_set(a, i) {
            product = product ^ (b << i as usize);
        }
    }
    product
}

/// Polynomial long division of `dividend` by `divisor`.
///
/// Guarantees `dividend == multiply(quotient, divisor) ^ remainder` and that
/// the remainder is zero or of lower degree than the divisor.
pub fn divide<W: Word>(dividend: W, divisor: W) -> Result<DivRem<W>> {
    let divisor_degree = degree(divisor).ok_or(FieldError::DivisionByZero)?;
    if divisor_degree == 0 {
        return Ok(DivRem {
            quotient: dividend,
            remainder: W::ZERO,
        });
    }

    let mut quotient = W::ZERO;
    let mut remainder = dividend;
    if let Some(top) = degree(dividend) {
        for i in (divisor_degree..=top).rev() {
            if is_bit_set(remainder, i) {
                let shift = (i - divisor_degree) as usize;
                quotient = quotient | (W::ONE << shift);
                remainder = remainder ^ (divisor << shift);
            }
        }
    }
    Ok(DivRem {
        quotient,
        remainder,
    })
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is zero.
pub fn gcd<W: Word>(mut a: W, mut b: W) -> W {
    while let Ok(DivRem { remainder, .. }) = divide(a, b) {
        a = b;
        b = remainder;
    }
    a
}
