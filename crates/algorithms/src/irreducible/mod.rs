//! Irreducibility testing for GF(2) polynomials
//!
//! A modulus is validated by exhaustive trial division: `p` is reducible if any
//! polynomial `f` with `2 <= f < 2^(bit_length(p) / 2 + 1)` divides it. The cost
//! is exponential in the bit length of `p`. That is fine for the degree-16
//! moduli this crate accepts (fewer than 2^9 trial divisors, run once per
//! [`Field`](crate::Field) construction) and unusable for large degrees.
//!
//! The trial range is taken literally. For tiny inputs it can contain `p`
//! itself, so `x` (0b10) and `x + 1` (0b11) are reported reducible, while the
//! constants 0 and 1 have an empty range and are reported irreducible.

use crate::poly;
use log::trace;

/// Smallest trial divisor of `p`, or `None` if `p` passes the test
pub fn smallest_factor(p: u64) -> Option<u64> {
    let factor_max = 1u64 << (poly::bit_length(p) / 2 + 1);
    trace!("trial division of {:#x} by factors below {:#x}", p, factor_max);

    (2..factor_max).find(|&factor| poly::div_rem(p, factor).1 == 0)
}

/// Returns `true` if `p` has a nontrivial factor
#[inline]
pub fn is_reducible(p: u64) -> bool {
    smallest_factor(p).is_some()
}

/// Returns `true` if `p` has no nontrivial factor
#[inline]
pub fn is_irreducible(p: u64) -> bool {
    !is_reducible(p)
}

/// The least polynomial `>= start` that passes the irreducibility test
///
/// Starting from `1 << d` yields the numerically smallest irreducible
/// polynomial of degree `d`.
pub fn next_irreducible(start: u64) -> Option<u64> {
    (start..=u64::MAX).find(|&p| is_irreducible(p))
}
