//! Known-answer vectors for the polynomial primitives and modulus validation

/// `(x, y, x * y)` carry-less products
pub const POLY_MUL: &[(u64, u64, u64)] = &[
    (0b100101, 1, 0b100101),
    (0b100101, 0, 0),
    (0b100101, 0b1100, 0b110111100),
    (0b11000001, 0b1100011, 0b10100100100011),
    (0b1100011, 0b11000001, 0b10100100100011),
];

/// `(p, q, quotient, remainder)` long divisions
pub const POLY_DIV: &[(u64, u64, u64, u64)] = &[
    (0b11, 0b10, 1, 1),
    (0b11100111, 1, 0b11100111, 0),
    (0b11100111, 0b1101, 0b10100, 0b11),
    (0b100010000110, 0b111001110, 0b1101, 0),
    (0b101, 0b110011, 0, 0b101),
];

/// Polynomials with a nontrivial factor
pub const REDUCIBLE: &[u64] = &[0b110111100, 0b10100100100011, 0x10020, 0x1000b];

/// Polynomials without a nontrivial factor
pub const IRREDUCIBLE: &[u64] = &[
    0b10000011,
    0b100111001,
    0b111111001,
    0b10001000000001011,
];

/// Candidate moduli whose degree is not 16
pub const WRONG_DEGREE: &[u64] = &[0, 1, 0xff, 0xffff, 0x2002b, 0x1_0000_1002b];
