//! Trait definition for finite fields with value-type elements
//!
//! Erasure coders and secret-sharing schemes are written against this trait
//! so that the concrete modulus is chosen by the caller.

use crate::error::{Error, Result};
use subtle::{ConditionallySelectable, ConstantTimeEq, CtOption};

/// A finite field whose elements are small `Copy` values.
///
/// Implementors are immutable handles: every method takes `&self` and is a
/// pure function of its arguments.
pub trait FiniteField: Copy + Send + Sync {
    /// Field element type
    type Element: Copy + Eq + core::fmt::Debug + ConstantTimeEq + ConditionallySelectable;

    /// Number of elements in the field
    const ORDER: u32;

    /// Additive identity
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity
    fn one(&self) -> Self::Element;

    /// Returns `x + y`
    fn add(&self, x: Self::Element, y: Self::Element) -> Self::Element;

    /// Returns `x * y`
    fn mul(&self, x: Self::Element, y: Self::Element) -> Self::Element;

    /// Returns the multiplicative inverse of `x`.
    ///
    /// Total: the inverse of zero is defined to be zero.
    fn inv(&self, x: Self::Element) -> Self::Element;

    /// Returns `x - y`
    fn sub(&self, x: Self::Element, y: Self::Element) -> Self::Element;

    /// Returns the multiplicative inverse of `x`, or none if `x` is zero
    fn invert(&self, x: Self::Element) -> CtOption<Self::Element> {
        CtOption::new(self.inv(x), !x.ct_eq(&self.zero()))
    }

    /// Returns `x / y`, failing if `y` is zero
    fn div_checked(&self, x: Self::Element, y: Self::Element) -> Result<Self::Element> {
        if y == self.zero() {
            return Err(Error::ZeroDivisor {
                context: "FiniteField::div_checked",
            });
        }
        Ok(self.mul(x, self.inv(y)))
    }
}
