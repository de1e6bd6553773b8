//! Arithmetic over binary extension fields GF(2^n).
//!
//! Elements are polynomials over GF(2) packed into an unsigned [`Word`], bit
//! `i` holding the coefficient of `x^i`. A [`FieldParameters`] value fixes the
//! degree `n` and the modulus and carries every field operation; there is no
//! global field state, so several fields can be used side by side.
//!
//! ```
//! use gf2n::prelude::*;
//!
//! let field = StandardField::Aes.parameters::<u16>()?;
//! assert_eq!(0xc1, field.multiply_reduce_interleaved(0x57, 0x83));
//! assert_eq!(0xca, field.multiplicative_inverse(0x53)?);
//! # Ok::<(), gf2n::error::FieldError>(())
//! ```

pub mod constants;
pub mod error;
pub mod field_element;
pub mod inverse;
pub mod irreducibility;
pub mod params;
pub mod poly;
pub mod prelude;
pub mod reduction;
pub mod traits;
pub mod utils;

pub use error::FieldError;
pub use error::Result;
pub use field_element::Element;
pub use inverse::Bezout;
pub use params::FieldParameters;
pub use params::StandardField;
pub use poly::DivRem;
pub use traits::Word;
pub use utils::degree;
