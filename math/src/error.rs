use thiserror::Error;

pub mod configuration {
    use thiserror::Error;

    /// Reasons a `(n, modulus)` pair is rejected before any arithmetic runs.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("extension degree must be at least 1")]
        ZeroDegree,
        #[error(
            "GF(2^{n}) needs a {required}-bit word but the word type has {available} bits"
        )]
        WordTooNarrow {
            n: u32,
            required: u32,
            available: u32,
        },
        #[error("modulus {modulus:#x} has degree {actual:?} but the field degree is {n}")]
        DegreeMismatch {
            n: u32,
            modulus: u128,
            actual: Option<u32>,
        },
        #[error("tap x^{tap} is not strictly between 1 and x^{n}")]
        InvalidTap { n: u32, tap: u32 },
        #[error("modulus {modulus:#x} is reducible over GF(2)")]
        Reducible { modulus: u128 },
        #[error("no built-in irreducible modulus of degree {0}")]
        NoDefaultModulus(u32),
    }
}

pub use configuration::Error as ConfigurationError;

/// Common result type used across this crate.
pub type Result<T, E = FieldError> = core::result::Result<T, E>;

/// Top-level error type for field construction and arithmetic.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("zero has no multiplicative inverse")]
    NoInverseExists,
    /// The EEA ended on a gcd other than one. Only reachable with a reducible
    /// modulus.
    #[error(
        "extended Euclid on {element:#x} ended with gcd {gcd:#x}; the modulus is not irreducible"
    )]
    InternalInvariantViolation { element: u128, gcd: u128 },
    #[error("{value:#x} is not an element of GF(2^{n})")]
    NotAnElement { value: u128, n: u32 },
}

pub type Error = FieldError;
