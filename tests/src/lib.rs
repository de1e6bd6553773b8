#[cfg(test)]
mod tests {
    use gf2n::prelude::*;
    use itertools::iproduct;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_strategy::proptest;

    fn toy() -> FieldParameters<u8> {
        FieldParameters::new(3, 0b1011).expect("x^3 + x + 1 is a valid modulus")
    }

    #[test]
    fn toy_field_walkthrough() {
        let field = toy();
        assert_eq!(8, field.cardinality());
        assert_eq!(6, field.add(5, 3));
        assert_eq!(4, field.multiply_reduce_interleaved(5, 3));
        // x * (x^2 + 1) = x^3 + x = 1 mod x^3 + x + 1
        assert_eq!(Ok(2), field.multiplicative_inverse(5));
        assert_eq!(1, field.multiply_reduce_interleaved(5, 2));
        assert_eq!(Ok(1), field.multiplicative_inverse(1));
    }

    #[test]
    fn toy_field_is_a_field() {
        let field = toy();
        for (a, b) in iproduct!(field.elements(), field.elements()) {
            let sum = field.add(a, b);
            let product = field.multiply_reduce_interleaved(a, b);
            assert!(field.contains(sum) && field.contains(product));
            assert_eq!(a, field.add(a, 0));
            assert_eq!(0, field.add(a, a));
            assert_eq!(sum, field.add(b, a));
            assert_eq!(a, field.multiply_reduce_interleaved(a, 1));
            assert_eq!(product, field.multiply_reduce_interleaved(b, a));
            assert_eq!(
                field.reduce_blakely(field.multiply_unreduced(a, b)),
                product
            );
            if b != 0 {
                let quotient = field.divide_elements(a, b).unwrap();
                assert!(field.contains(quotient));
                assert_eq!(a, field.multiply_reduce_interleaved(quotient, b));
            }
        }
    }

    #[test]
    fn error_contracts() {
        let field = toy();
        assert_eq!(Err(FieldError::DivisionByZero), divide(6u8, 0));
        assert_eq!(Err(FieldError::DivisionByZero), field.divide_elements(6, 0));
        assert_eq!(Err(FieldError::NoInverseExists), field.multiplicative_inverse(0));
        assert!(matches!(
            FieldParameters::<u8>::new(4, 0b1011),
            Err(FieldError::InvalidConfiguration(
                ConfigurationError::DegreeMismatch { .. }
            ))
        ));
    }

    #[test]
    fn reducible_modulus_surfaces_invariant_violation() {
        // x^4 + x^2 + 1 = (x^2 + x + 1)^2
        let field = FieldParameters::<u16>::new(4, 0b10101).unwrap();
        assert!(!field.is_irreducible());
        assert_eq!(
            Err(FieldError::InternalInvariantViolation {
                element: 0b111,
                gcd: 0b111,
            }),
            field.multiplicative_inverse(0b111)
        );
        // Elements coprime to the modulus still invert.
        let inverse = field.multiplicative_inverse(0b10).unwrap();
        assert_eq!(1, field.multiply_reduce_interleaved(0b10, inverse));
    }

    #[test]
    fn same_algorithms_on_every_word_width() {
        let narrow = StandardField::Aes.parameters::<u16>().unwrap();
        let wide = StandardField::Aes.parameters::<u128>().unwrap();
        for (a, b) in iproduct!(narrow.elements(), [0x01u16, 0x02, 0x53, 0xca, 0xff]) {
            let (wa, wb) = (u128::from(a), u128::from(b));
            assert_eq!(
                u128::from(narrow.multiply_reduce_interleaved(a, b)),
                wide.multiply_reduce_interleaved(wa, wb)
            );
            assert_eq!(
                narrow.divide_elements(a, b).map(u128::from),
                wide.divide_elements(wa, wb)
            );
        }
    }

    #[test]
    fn several_fields_coexist() {
        let toy = toy();
        let aes = StandardField::Aes.parameters::<u8>();
        // GF(2^8) needs 15-bit products, which a byte cannot hold.
        assert!(aes.is_err());
        let aes = StandardField::Aes.parameters::<u16>().unwrap();
        assert_eq!(Ok(2), toy.multiplicative_inverse(5));
        assert_eq!(Ok(0xca), aes.multiplicative_inverse(0x53));
    }

    #[proptest(cases = 64)]
    fn largest_supported_degree_round_trips(seed: u64) {
        let field = FieldParameters::<u128>::with_default_modulus(64).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let a = field.random_element(&mut rng);
        let b = field.random_element(&mut rng);
        prop_assume!(a != 0 && b != 0);

        let inverse = field.multiplicative_inverse(a).unwrap();
        prop_assert_eq!(1, field.multiply_reduce_interleaved(a, inverse));

        let quotient = field.divide_elements(b, a).unwrap();
        prop_assert_eq!(b, field.multiply_reduce_interleaved(quotient, a));

        prop_assert_eq!(
            field.reduce_blakely(field.multiply_unreduced(a, b)),
            field.multiply_reduce_interleaved(a, b)
        );
    }

    #[proptest]
    fn polynomial_division_invariant(
        c: u32,
        #[filter(#d != 0)] d: u32,
    ) {
        let (c, d) = (u64::from(c), u64::from(d));
        let DivRem { quotient, remainder } = divide(c, d).unwrap();
        prop_assert_eq!(c, add(multiply(quotient, d), remainder));
        prop_assert!(remainder == 0 || degree(remainder) < degree(d));
    }

    #[proptest]
    fn bound_elements_agree_with_raw_operations(
        #[strategy(0u32..1 << 16)] a: u32,
        #[strategy(1u32..1 << 16)] b: u32,
    ) {
        let field = StandardField::Gf2_16.parameters::<u32>().unwrap();
        let (x, y) = (field.element(a).unwrap(), field.element(b).unwrap());
        prop_assert_eq!(field.multiply_reduce_interleaved(a, b), (x * y).value());
        prop_assert_eq!(field.divide_elements(a, b).unwrap(), (x / y).value());
        prop_assert_eq!(field.multiplicative_inverse(b).unwrap(), y.inverse().value());
    }
}
