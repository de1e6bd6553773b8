use std::fmt;
use std::iter;

use arbitrary::Arbitrary;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_DEGREE;
use crate::constants::LOW_WEIGHT_IRREDUCIBLES;
use crate::error::ConfigurationError;
use crate::error::FieldError;
use crate::error::Result;
use crate::field_element::Element;
use crate::traits::Word;
use crate::utils::degree;
use crate::utils::low_mask;

/// Default preset used by examples and documentation (GF(2^3)).
pub const DEFAULT_STANDARD_FIELD: StandardField = StandardField::Toy;

/// Named fields with a built-in modulus.
pub const SUPPORTED_STANDARD_FIELDS: [StandardField; 4] = [
    StandardField::Toy,
    StandardField::Aes,
    StandardField::Gf2_16,
    StandardField::Gf2_31,
];

/// Commonly used binary fields, identified by their extension degree.
///
/// Every preset uses the modulus listed in
/// [`LOW_WEIGHT_IRREDUCIBLES`](crate::constants::LOW_WEIGHT_IRREDUCIBLES).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Arbitrary, Serialize, Deserialize,
)]
#[repr(u32)]
pub enum StandardField {
    /// GF(2^3) with x^3 + x + 1, small enough to check by hand.
    Toy = 3,
    /// GF(2^8) with x^8 + x^4 + x^3 + x + 1 (Rijndael).
    Aes = 8,
    /// GF(2^16) with x^16 + x^5 + x^3 + x + 1.
    Gf2_16 = 16,
    /// GF(2^31) with x^31 + x^3 + 1.
    Gf2_31 = 31,
}

impl StandardField {
    #[inline]
    pub const fn degree(self) -> u32 {
        self as u32
    }

    /// Build the parameters of this preset on the word type `W`.
    pub fn parameters<W: Word>(self) -> Result<FieldParameters<W>> {
        FieldParameters::with_default_modulus(self.degree())
    }
}

impl TryFrom<u32> for StandardField {
    type Error = UnsupportedStandardField;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        SUPPORTED_STANDARD_FIELDS
            .into_iter()
            .find(|field| field.degree() == value)
            .ok_or(UnsupportedStandardField(value))
    }
}

/// Error raised when no preset exists for the requested degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedStandardField(pub u32);

impl fmt::Display for UnsupportedStandardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no standard binary field of degree {}", self.0)
    }
}

impl std::error::Error for UnsupportedStandardField {}

/// Degree and modulus of a binary extension field GF(2^n).
///
/// Construction guarantees that the modulus has degree exactly `n` and that
/// `W` is wide enough for every unreduced product. Irreducibility of the
/// modulus is a precondition that [`FieldParameters::new`] does not check;
/// use [`FieldParameters::new_irreducible`] to have it verified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawFieldParameters<W>",
    into = "RawFieldParameters<W>",
    bound = "W: Word"
)]
pub struct FieldParameters<W: Word = u64> {
    pub(crate) n: u32,
    pub(crate) modulus: W,
}

#[derive(Serialize, Deserialize)]
#[serde(bound = "W: Word")]
struct RawFieldParameters<W: Word> {
    n: u32,
    modulus: W,
}

impl<W: Word> From<FieldParameters<W>> for RawFieldParameters<W> {
    fn from(params: FieldParameters<W>) -> Self {
        Self {
            n: params.n,
            modulus: params.modulus,
        }
    }
}

impl<W: Word> TryFrom<RawFieldParameters<W>> for FieldParameters<W> {
    type Error = FieldError;

    fn try_from(raw: RawFieldParameters<W>) -> Result<Self> {
        Self::new(raw.n, raw.modulus)
    }
}

impl<W: Word> Default for FieldParameters<W> {
    /// GF(2^3) with x^3 + x + 1.
    fn default() -> Self {
        Self {
            n: DEFAULT_DEGREE,
            modulus: (W::ONE << DEFAULT_DEGREE as usize) | (W::ONE << 1) | W::ONE,
        }
    }
}

/// Reject degrees whose products or interleaved intermediates overflow `W`.
fn check_word_width<W: Word>(n: u32) -> Result<(), ConfigurationError> {
    if n == 0 {
        return Err(ConfigurationError::ZeroDegree);
    }
    let required = (n.saturating_mul(2) - 1).max(n.saturating_add(1));
    if required > W::BITS {
        return Err(ConfigurationError::WordTooNarrow {
            n,
            required,
            available: W::BITS,
        });
    }
    Ok(())
}

impl<W: Word> FieldParameters<W> {
    /// Validate `(n, modulus)`. The modulus must have degree exactly `n`.
    pub fn new(n: u32, modulus: W) -> Result<Self> {
        check_word_width::<W>(n)?;
        let actual = degree(modulus);
        if actual != Some(n) {
            return Err(ConfigurationError::DegreeMismatch {
                n,
                modulus: modulus.widen(),
                actual,
            }
            .into());
        }
        log::debug!("configured GF(2^{n}) with modulus {modulus:#x}");
        Ok(Self { n, modulus })
    }

    /// Like [`Self::new`], additionally running Rabin's irreducibility test.
    pub fn new_irreducible(n: u32, modulus: W) -> Result<Self> {
        let params = Self::new(n, modulus)?;
        if !params.is_irreducible() {
            log::warn!("rejecting reducible modulus {modulus:#x} for GF(2^{n})");
            return Err(ConfigurationError::Reducible {
                modulus: modulus.widen(),
            }
            .into());
        }
        Ok(params)
    }

    /// Modulus `x^n + x^t1 + ... + x^tk + 1` from its middle exponents.
    pub fn from_taps(n: u32, taps: &[u32]) -> Result<Self> {
        check_word_width::<W>(n)?;
        let mut modulus = (W::ONE << n as usize) | W::ONE;
        for &tap in taps {
            if tap == 0 || tap >= n {
                return Err(ConfigurationError::InvalidTap { n, tap }.into());
            }
            modulus = modulus | (W::ONE << tap as usize);
        }
        Self::new(n, modulus)
    }

    /// Field of degree `n` using the built-in lowest-weight irreducible
    /// modulus.
    pub fn with_default_modulus(n: u32) -> Result<Self> {
        let low_terms = LOW_WEIGHT_IRREDUCIBLES
            .get(&n)
            .copied()
            .ok_or(ConfigurationError::NoDefaultModulus(n))?;
        check_word_width::<W>(n)?;
        let modulus = (0..n)
            .filter(|&i| (low_terms >> i) & 1 == 1)
            .fold(W::ONE << n as usize, |acc, i| acc | (W::ONE << i as usize));
        log::debug!("using built-in modulus {modulus:#x} for degree {n}");
        Self::new(n, modulus)
    }

    /// Extension degree `n`.
    #[inline]
    pub const fn degree(&self) -> u32 {
        self.n
    }

    #[inline]
    pub fn modulus(&self) -> W {
        self.modulus
    }

    /// Number of elements, 2^n.
    #[inline]
    pub fn cardinality(&self) -> W {
        W::ONE << self.n as usize
    }

    /// Whether `value` encodes a polynomial of degree below `n`.
    #[inline]
    pub fn contains(&self, value: W) -> bool {
        (value & !low_mask::<W>(self.n)).is_zero()
    }

    pub(crate) fn check_element(&self, value: W) -> Result<W> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(FieldError::NotAnElement {
                value: value.widen(),
                n: self.n,
            })
        }
    }

    /// Bind `value` to this field.
    pub fn element(&self, value: W) -> Result<Element<'_, W>> {
        self.check_element(value)
            .map(|value| Element::new_unchecked(value, self))
    }

    pub fn zero(&self) -> Element<'_, W> {
        Element::new_unchecked(W::ZERO, self)
    }

    pub fn one(&self) -> Element<'_, W> {
        Element::new_unchecked(W::ONE, self)
    }

    /// All 2^n elements in increasing order.
    pub fn elements(&self) -> impl Iterator<Item = W> + Clone {
        let last = self.cardinality() - W::ONE;
        iter::successors(Some(W::ZERO), move |&value| {
            (value < last).then(|| value + W::ONE)
        })
    }

    /// Uniformly random element.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> W {
        (0..self.n).fold(W::ZERO, |acc, i| {
            if rng.random::<bool>() {
                acc | (W::ONE << i as usize)
            } else {
                acc
            }
        })
    }
}
