//! Multiplicative inverses via the extended Euclidean algorithm, and field
//! division built on them.

use crate::error::FieldError;
use crate::error::Result;
use crate::params::FieldParameters;
use crate::poly;
use crate::poly::DivRem;
use crate::traits::Word;

/// Bezout identity `gcd = a·x + modulus·y` over GF(2)[x].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bezout<W> {
    pub gcd: W,
    pub x: W,
    pub y: W,
}

impl<W: Word> FieldParameters<W> {
    /// Run the extended Euclidean algorithm on `(a, modulus)`.
    ///
    /// Every round keeps `r = a·x + modulus·y` for both the previous and the
    /// current remainder. All intermediate coefficients have degree at most
    /// `n`, so they fit the word without reduction.
    pub fn extended_gcd(&self, a: W) -> Result<Bezout<W>> {
        self.check_element(a)?;
        let (mut r_prev, mut r_cur) = (a, self.modulus);
        let (mut x_prev, mut x_cur) = (W::ONE, W::ZERO);
        let (mut y_prev, mut y_cur) = (W::ZERO, W::ONE);

        while !r_cur.is_zero() {
            let DivRem {
                quotient,
                remainder,
            } = poly::divide(r_prev, r_cur)?;
            log::trace!(
                "eea round: {r_prev:#x} = {quotient:#x} * {r_cur:#x} + {remainder:#x}"
            );
            (r_prev, r_cur) = (r_cur, remainder);
            (x_prev, x_cur) = (x_cur, x_prev ^ poly::multiply(quotient, x_cur));
            (y_prev, y_cur) = (y_cur, y_prev ^ poly::multiply(quotient, y_cur));
        }

        Ok(Bezout {
            gcd: r_prev,
            x: x_prev,
            y: y_prev,
        })
    }

    /// `a^-1 mod modulus`.
    ///
    /// Zero has no inverse and yields [`FieldError::NoInverseExists`]. A gcd
    /// other than one means the modulus is reducible and is reported as
    /// [`FieldError::InternalInvariantViolation`].
    pub fn multiplicative_inverse(&self, a: W) -> Result<W> {
        if a.is_zero() {
            return Err(FieldError::NoInverseExists);
        }
        if a.is_one() {
            return Ok(W::ONE);
        }
        let Bezout { gcd, x, .. } = self.extended_gcd(a)?;
        if !gcd.is_one() {
            log::error!(
                "{a:#x} shares the factor {gcd:#x} with modulus {:#x}",
                self.modulus
            );
            return Err(FieldError::InternalInvariantViolation {
                element: a.widen(),
                gcd: gcd.widen(),
            });
        }
        // a·x = 1 + modulus·y, so x mod modulus is the inverse.
        Ok(poly::divide(x, self.modulus)?.remainder)
    }

    /// `a / b` as `a * b^-1`.
    pub fn divide_elements(&self, a: W, b: W) -> Result<W> {
        if b.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let a = self.check_element(a)?;
        let inverse = self.multiplicative_inverse(b)?;
        Ok(self.multiply_reduce_interleaved(a, inverse))
    }
}
