pub use crate::{
    error::{ConfigurationError, FieldError},
    field_element::Element,
    inverse::Bezout,
    params::{FieldParameters, StandardField},
    poly::{add, divide, gcd, multiply, DivRem},
    traits::Word,
    utils::{degree, is_bit_set, low_mask},
};
