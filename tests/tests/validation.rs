//! Modulus validation and polynomial known-answer tests

use gf65536::{irreducible, poly, Error, Field, DEFAULT};
use gf65536_params::{DEFAULT_MODULUS, FIELD_DEGREE};
use gf65536_tests::vectors;

#[test]
fn poly_mul_vectors() {
    for &(x, y, expected) in vectors::POLY_MUL {
        assert_eq!(poly::mul(x, y), expected, "mul({:#b}, {:#b})", x, y);
    }
}

#[test]
fn poly_div_vectors() {
    for &(p, q, quot, rem) in vectors::POLY_DIV {
        assert_eq!(poly::div_rem(p, q), (quot, rem), "div_rem({:#b}, {:#b})", p, q);
    }
}

#[test]
fn irreducibility_vectors() {
    for &p in vectors::REDUCIBLE {
        assert!(irreducible::is_reducible(p), "{:#b}", p);
    }
    for &p in vectors::IRREDUCIBLE {
        assert!(!irreducible::is_reducible(p), "{:#b}", p);
    }
}

#[test]
fn wrong_degree_is_rejected() {
    for &modulus in vectors::WRONG_DEGREE {
        match Field::new(modulus) {
            Err(Error::InvalidDegree { expected, .. }) => assert_eq!(expected, FIELD_DEGREE),
            other => panic!("{:#x}: expected InvalidDegree, got {:?}", modulus, other),
        }
    }
}

#[test]
fn reducible_modulus_is_rejected() {
    let err = Field::new(0x10020).unwrap_err();
    assert!(matches!(err, Error::ReducibleModulus { modulus: 0x10020, .. }));
    assert_eq!(err.context(), "Field::new");
}

#[test]
fn every_degree_16_modulus_is_classified_consistently() {
    // a modulus without the constant term is divisible by x
    for modulus in (0x10000u64..0x20000).step_by(2) {
        assert!(Field::new(modulus).is_err(), "{:#x}", modulus);
    }
    // the least accepted modulus is the default one
    let first = (0x10000u64..0x20000).find(|&m| Field::new(m).is_ok());
    assert_eq!(first, Some(u64::from(DEFAULT_MODULUS)));
}

#[test]
fn validated_default_matches_free_functions() {
    let field = Field::new(0x1002b).unwrap();
    assert_eq!(field, DEFAULT);

    for x in (0..=u16::MAX).step_by(257) {
        for y in (1..=u16::MAX).step_by(4099) {
            assert_eq!(field.add(x, y), gf65536::add(x, y));
            assert_eq!(field.mul(x, y), gf65536::mul(x, y));
        }
        assert_eq!(field.inv(x), gf65536::inv(x));
    }
}
