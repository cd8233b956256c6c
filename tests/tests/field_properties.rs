//! Property-based tests for GF(2^16) arithmetic

use gf65536::{Field, DEFAULT};
use gf65536_params::WELL_KNOWN_MODULI;
use gf65536_tests::properties;
use proptest::prelude::*;

/// Any of the well-known moduli
fn any_field() -> impl Strategy<Value = Field> {
    prop::sample::select(WELL_KNOWN_MODULI.to_vec())
        .prop_map(|modulus| Field::try_from(modulus).unwrap())
}

proptest! {
    #[test]
    fn addition_forms_a_group(x in any::<u16>(), y in any::<u16>(), z in any::<u16>()) {
        prop_assert!(properties::additive_group(&DEFAULT, x, y, z));
    }

    #[test]
    fn multiplication_forms_a_monoid(x in any::<u16>(), y in any::<u16>(), z in any::<u16>()) {
        prop_assert!(properties::multiplicative_monoid(&DEFAULT, x, y, z));
    }

    #[test]
    fn multiplication_distributes(x in any::<u16>(), y in any::<u16>(), z in any::<u16>()) {
        prop_assert!(properties::distributive(&DEFAULT, x, y, z));
    }

    #[test]
    fn every_element_inverts(x in any::<u16>()) {
        prop_assert!(properties::inverse(&DEFAULT, x));
    }

    #[test]
    fn axioms_hold_for_every_well_known_modulus(
        field in any_field(),
        x in any::<u16>(),
        y in any::<u16>(),
        z in any::<u16>()
    ) {
        prop_assert!(properties::additive_group(&field, x, y, z));
        prop_assert!(properties::multiplicative_monoid(&field, x, y, z));
        prop_assert!(properties::distributive(&field, x, y, z));
        prop_assert!(properties::inverse(&field, x));
    }

    #[test]
    fn division_undoes_multiplication(x in any::<u16>(), y in 1..=u16::MAX) {
        prop_assert_eq!(DEFAULT.div(DEFAULT.mul(x, y), y), Ok(x));
    }

    #[test]
    fn pow_matches_repeated_multiplication(x in any::<u16>(), exp in 0u32..64) {
        let expected = (0..exp).fold(1, |acc, _| DEFAULT.mul(acc, x));
        prop_assert_eq!(DEFAULT.pow(x, exp), expected);
    }
}
