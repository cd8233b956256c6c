//! Irreducible polynomials of degree 16 over GF(2)
//!
//! Bit i of each value is the coefficient of x^i.

/// x^16 + x^5 + x^3 + x + 1, the least-weight irreducible polynomial of degree 16
pub const DEFAULT_MODULUS: u32 = 0x1002b;

/// x^16 + x^5 + x^3 + x^2 + 1
pub const MODULUS_1002D: u32 = 0x1002d;

/// x^16 + x^6 + x^4 + x + 1
pub const MODULUS_10053: u32 = 0x10053;

/// x^16 + x^12 + x^3 + x + 1 (the PAR2 Reed-Solomon field)
pub const MODULUS_1100B: u32 = 0x1100b;

/// Moduli that are known to define GF(2^16), default first
pub const WELL_KNOWN_MODULI: [u32; 4] = [
    DEFAULT_MODULUS,
    MODULUS_1002D,
    MODULUS_10053,
    MODULUS_1100B,
];
