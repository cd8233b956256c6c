//! Validation utilities for moduli and operands

use super::{Error, Result};
use crate::{irreducible, poly};
use gf65536_params::{FIELD_DEGREE, MODULUS_BIT_LENGTH};

/// Validate that a candidate modulus has degree exactly 16
#[inline(always)]
pub fn degree(context: &'static str, candidate: u64) -> Result<()> {
    let bits = poly::bit_length(candidate);
    if bits != MODULUS_BIT_LENGTH {
        return Err(Error::InvalidDegree {
            context,
            degree: bits.checked_sub(1),
            expected: FIELD_DEGREE,
        });
    }
    Ok(())
}

/// Validate that a candidate modulus has no nontrivial factor
///
/// Runs the full trial division; see [`irreducible::smallest_factor`].
pub fn irreducible(context: &'static str, candidate: u64) -> Result<()> {
    if let Some(factor) = irreducible::smallest_factor(candidate) {
        return Err(Error::ReducibleModulus {
            context,
            modulus: candidate,
            factor,
        });
    }
    Ok(())
}

/// Validate that a divisor is not the zero element
#[inline(always)]
pub fn nonzero(context: &'static str, divisor: u16) -> Result<()> {
    if divisor == 0 {
        return Err(Error::ZeroDivisor { context });
    }
    Ok(())
}
