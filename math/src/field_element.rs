use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use serde::Serialize;
use serde::Serializer;

use crate::error::Result;
use crate::params::FieldParameters;
use crate::traits::Word;
use crate::utils::degree;
use crate::utils::is_bit_set;

/// Element of GF(2^n) bound to the parameters of its field.
///
/// Operators dispatch to the interleaved multiplier and the EEA inverse of the
/// borrowed [`FieldParameters`]. Both operands of a binary operator must come
/// from the same field.
///
/// # Examples
///
/// ```
/// use gf2n::prelude::*;
///
/// let field = FieldParameters::<u8>::new(3, 0b1011).unwrap();
/// let a = field.element(5).unwrap();
/// let b = field.element(3).unwrap();
/// assert_eq!(6, (a + b).value());
/// assert_eq!(4, (a * b).value());
/// assert_eq!(2, a.inverse().value());
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Element<'f, W: Word = u64> {
    value: W,
    field: &'f FieldParameters<W>,
}

impl<'f, W: Word> Element<'f, W> {
    /// Caller guarantees `field.contains(value)`.
    #[inline]
    pub(crate) fn new_unchecked(value: W, field: &'f FieldParameters<W>) -> Self {
        debug_assert!(field.contains(value));
        Self { value, field }
    }

    #[inline]
    pub fn value(&self) -> W {
        self.value
    }

    #[inline]
    pub fn field(&self) -> &'f FieldParameters<W> {
        self.field
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    pub fn try_inverse(&self) -> Result<Self> {
        self.field
            .multiplicative_inverse(self.value)
            .map(|value| Self::new_unchecked(value, self.field))
    }

    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub fn inverse(&self) -> Self {
        assert!(
            !self.is_zero(),
            "Attempted to find the multiplicative inverse of zero."
        );
        match self.try_inverse() {
            Ok(inverse) => inverse,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn inverse_or_zero(&self) -> Self {
        if self.is_zero() {
            *self
        } else {
            self.inverse()
        }
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        self.assert_same_field(&rhs);
        self.field
            .divide_elements(self.value, rhs.value)
            .map(|value| Self::new_unchecked(value, self.field))
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }

    #[must_use]
    pub fn pow(self, exp: u128) -> Self {
        Self::new_unchecked(self.field.pow(self.value, exp), self.field)
    }

    #[inline]
    fn assert_same_field(&self, other: &Self) {
        debug_assert_eq!(
            self.field, other.field,
            "operands belong to different fields"
        );
    }
}

/// Polynomial notation, highest power first: `x^2 + 1`.
impl<W: Word> fmt::Display for Element<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(top) = degree(self.value) else {
            return write!(f, "0");
        };
        let mut first = true;
        for i in (0..=top).rev().filter(|&i| is_bit_set(self.value, i)) {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{i}")?,
            }
        }
        Ok(())
    }
}

impl<W: Word> fmt::LowerHex for Element<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl<W: Word> fmt::UpperHex for Element<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl<W: Word> fmt::Binary for Element<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.value, f)
    }
}

impl<W: Word> Serialize for Element<'_, W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<W: Word> Add for Element<'_, W> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.assert_same_field(&rhs);
        Self::new_unchecked(self.field.add(self.value, rhs.value), self.field)
    }
}

impl<W: Word> AddAssign for Element<'_, W> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<W: Word> Sub for Element<'_, W> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl<W: Word> SubAssign for Element<'_, W> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Characteristic 2: every element is its own additive inverse.
impl<W: Word> Neg for Element<'_, W> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self
    }
}

impl<W: Word> Mul for Element<'_, W> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.assert_same_field(&rhs);
        let value = self.field.multiply_reduce_interleaved(self.value, rhs.value);
        Self::new_unchecked(value, self.field)
    }
}

impl<W: Word> MulAssign for Element<'_, W> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<W: Word> Div for Element<'_, W> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}
