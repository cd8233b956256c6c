//! The finite field GF(2^16)
//!
//! A [`Field`] is the irreducible degree-16 polynomial that defines one
//! instance of GF(2^16). It is validated once, at construction, and is a plain
//! `Copy` value afterwards: every arithmetic method is a pure function of the
//! modulus and its operands, so a single `Field` can be shared by any number
//! of threads.
//!
//! Elements are `u16` values, bit i being the coefficient of x^i. Different
//! moduli give isomorphic fields with different multiplication tables.

use core::fmt;

use gf65536_api::FiniteField;
use gf65536_params::FIELD_ORDER;
use log::debug;
use subtle::{ConstantTimeEq, CtOption};

use crate::error::{validate, Error, Result};
use crate::poly;

/// GF(2^16) defined by an irreducible polynomial of degree 16
///
/// The wrapped modulus always has bit length 17 and passes the
/// irreducibility test; there is no way to build a `Field` that does not.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Field(u32);

impl Field {
    /// Create a field from a candidate modulus.
    ///
    /// Fails with [`Error::InvalidDegree`] unless the modulus has degree
    /// exactly 16, and with [`Error::ReducibleModulus`] if it factors over
    /// GF(2). The irreducibility check is exhaustive trial division, so build
    /// a field once and reuse it.
    pub fn new(modulus: u64) -> Result<Self> {
        const CONTEXT: &str = "Field::new";

        let checked = validate::degree(CONTEXT, modulus)
            .and_then(|()| validate::irreducible(CONTEXT, modulus));

        match checked {
            Ok(()) => {
                debug!("accepted GF(2^16) modulus {:#x}", modulus);
                // bit length 17 was checked above
                Ok(Self(modulus as u32))
            }
            Err(err) => {
                debug!("rejected GF(2^16) modulus {:#x}: {}", modulus, err);
                Err(err)
            }
        }
    }

    /// Wrap a modulus that is already known to be valid
    pub(crate) const fn from_validated(modulus: u32) -> Self {
        Self(modulus)
    }

    /// The modulus defining this field
    #[inline]
    pub const fn modulus(&self) -> u32 {
        self.0
    }

    /// Returns `x + y`
    #[inline]
    pub const fn add(&self, x: u16, y: u16) -> u16 {
        x ^ y
    }

    /// Returns `x - y`, which is `x + y` in characteristic 2
    #[inline]
    pub const fn sub(&self, x: u16, y: u16) -> u16 {
        x ^ y
    }

    /// Returns `x * y`
    pub fn mul(&self, x: u16, y: u16) -> u16 {
        // The remainder has bit length below 17
        poly::mul_mod(u64::from(self.0), u64::from(x), u64::from(y)) as u16
    }

    /// Returns the multiplicative inverse of `x`.
    ///
    /// Zero has no inverse; `inv(0)` is defined to be 0. Use
    /// [`invert`](Self::invert) or [`div`](Self::div) to have zero rejected.
    pub fn inv(&self, x: u16) -> u16 {
        poly::inv_mod(u64::from(self.0), u64::from(x)) as u16
    }

    /// Returns the multiplicative inverse of `x`, or none if `x` is zero
    pub fn invert(&self, x: u16) -> CtOption<u16> {
        CtOption::new(self.inv(x), !x.ct_eq(&0))
    }

    /// Returns `x / y`
    pub fn div(&self, x: u16, y: u16) -> Result<u16> {
        validate::nonzero("Field::div", y)?;
        Ok(self.mul(x, self.inv(y)))
    }

    /// Returns `x` raised to the power `exp`, with `pow(x, 0) = 1` for every `x`
    pub fn pow(&self, x: u16, mut exp: u32) -> u16 {
        let mut result = 1;
        let mut base = x;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        result
    }
}

impl Default for Field {
    fn default() -> Self {
        crate::standard::DEFAULT
    }
}

impl TryFrom<u64> for Field {
    type Error = Error;

    fn try_from(modulus: u64) -> Result<Self> {
        Self::new(modulus)
    }
}

impl TryFrom<u32> for Field {
    type Error = Error;

    fn try_from(modulus: u32) -> Result<Self> {
        Self::new(u64::from(modulus))
    }
}

impl From<Field> for u32 {
    fn from(field: Field) -> Self {
        field.0
    }
}

impl FiniteField for Field {
    type Element = u16;

    const ORDER: u32 = FIELD_ORDER;

    fn zero(&self) -> u16 {
        0
    }

    fn one(&self) -> u16 {
        1
    }

    fn add(&self, x: u16, y: u16) -> u16 {
        Field::add(self, x, y)
    }

    fn mul(&self, x: u16, y: u16) -> u16 {
        Field::mul(self, x, y)
    }

    fn inv(&self, x: u16) -> u16 {
        Field::inv(self, x)
    }

    fn sub(&self, x: u16, y: u16) -> u16 {
        Field::sub(self, x, y)
    }

    fn invert(&self, x: u16) -> CtOption<u16> {
        Field::invert(self, x)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({:#x})", self.0)
    }
}

/// Formats the modulus as a polynomial, e.g. `x^16 + x^5 + x^3 + x + 1`
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for i in (0..poly::bit_length(u64::from(self.0))).rev() {
            if self.0 & (1 << i) == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match i {
                0 => f.write_str("1")?,
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}
