//! Dimensions of the field GF(2^16)

/// Degree of the field modulus
pub const FIELD_DEGREE: u32 = 16;

/// Bit length of a valid modulus (degree + 1, leading coefficient set)
pub const MODULUS_BIT_LENGTH: u32 = FIELD_DEGREE + 1;

/// Number of elements in the field
pub const FIELD_ORDER: u32 = 1 << FIELD_DEGREE;

/// Order of the multiplicative group (every nonzero element)
pub const MULTIPLICATIVE_ORDER: u32 = FIELD_ORDER - 1;

/// Size of a field element in bytes
pub const ELEMENT_SIZE: usize = 2;
