//! Polynomial arithmetic over GF(2)
//!
//! A polynomial is packed into a `u64`: bit i is the coefficient of x^i.
//! Addition and subtraction are both XOR, so nothing here ever carries.
//! The words are wide enough for every intermediate value GF(2^16) produces
//! (products of two elements have degree at most 30).

/// Number of bits needed to represent `p`: the degree plus one, or 0 for the
/// zero polynomial.
#[inline]
pub const fn bit_length(p: u64) -> u32 {
    u64::BITS - p.leading_zeros()
}

/// Carry-less product of `x` and `y`, without reduction.
///
/// The result has bit length at most `bit_length(x) + bit_length(y)`;
/// coefficients above x^63 are discarded.
pub fn mul(mut x: u64, mut y: u64) -> u64 {
    let mut z = 0;
    while y > 0 {
        if y & 1 == 1 {
            z ^= x;
        }
        x <<= 1;
        y >>= 1;
    }
    z
}

/// Long division of `p` by `q`, returning `(quotient, remainder)`.
///
/// The remainder always has a smaller bit length than `q`.
///
/// # Panics
///
/// Panics if `q` is the zero polynomial.
pub fn div_rem(mut p: u64, q: u64) -> (u64, u64) {
    assert!(q != 0, "polynomial division by zero");

    let nq = bit_length(q);
    let mut np = bit_length(p);
    let mut quot = 0;

    while np >= nq {
        if p & (1 << (np - 1)) != 0 {
            p ^= q << (np - nq);
            quot |= 1 << (np - nq);
        }
        np -= 1;
    }

    (quot, p)
}

/// `x * y mod modulus`
#[inline]
pub fn mul_mod(modulus: u64, x: u64, y: u64) -> u64 {
    div_rem(mul(x, y), modulus).1
}

/// Inverse of `x` modulo `modulus` by the extended Euclidean algorithm.
///
/// Only the Bézout coefficient on `x`'s side is tracked. When `modulus` is
/// irreducible and `x` is nonzero and reduced, the final remainder is 1 and
/// that coefficient is the inverse. For `x = 0` the loop never runs and the
/// result is 0.
pub fn inv_mod(modulus: u64, x: u64) -> u64 {
    let (mut a, mut b) = (modulus, x);
    let (mut t, mut v) = (0, 1);

    while b != 0 {
        let (q, r) = div_rem(a, b);
        (a, b) = (b, r);
        (t, v) = (v, t ^ mul(q, v));
    }

    t
}
