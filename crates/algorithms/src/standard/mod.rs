//! The default field and free functions operating on it
//!
//! Most callers do not care which modulus defines their field, only that
//! everybody uses the same one. [`DEFAULT`] is x^16 + x^5 + x^3 + x + 1, the
//! least-weight irreducible polynomial of degree 16. It is a constant, so the
//! functions below never pay for validation.

use crate::field::Field;
use gf65536_params::DEFAULT_MODULUS;

/// GF(2^16) defined by x^16 + x^5 + x^3 + x + 1
pub const DEFAULT: Field = Field::from_validated(DEFAULT_MODULUS);

/// Returns `x + y` in the default field
#[inline]
pub fn add(x: u16, y: u16) -> u16 {
    DEFAULT.add(x, y)
}

/// Returns `x * y` in the default field
#[inline]
pub fn mul(x: u16, y: u16) -> u16 {
    DEFAULT.mul(x, y)
}

/// Returns the multiplicative inverse of `x` in the default field (0 for 0)
#[inline]
pub fn inv(x: u16) -> u16 {
    DEFAULT.inv(x)
}
