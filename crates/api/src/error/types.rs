//! Error type definitions for finite field operations

/// Primary error type for finite field operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The candidate modulus does not have the required degree
    InvalidDegree {
        context: &'static str,
        /// Degree found, `None` for the zero polynomial
        degree: Option<u32>,
        expected: u32,
    },

    /// The candidate modulus factors over GF(2)
    ReducibleModulus {
        context: &'static str,
        modulus: u64,
        /// Smallest nontrivial divisor found by trial division
        factor: u64,
    },

    /// Division by the zero element
    ZeroDivisor {
        context: &'static str,
    },
}

/// Result type for finite field operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidDegree { context, .. }
            | Self::ReducibleModulus { context, .. }
            | Self::ZeroDivisor { context } => *context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDegree { context, degree: Some(degree), expected } => {
                write!(f, "{}: polynomial must be of degree {} (got degree {})",
                    context, expected, degree)
            },
            Self::InvalidDegree { context, degree: None, expected } => {
                write!(f, "{}: polynomial must be of degree {} (got the zero polynomial)",
                    context, expected)
            },
            Self::ReducibleModulus { context, modulus, factor } => {
                write!(f, "{}: polynomial must be irreducible ({:#x} is divisible by {:#x})",
                    context, modulus, factor)
            },
            Self::ZeroDivisor { context } => {
                write!(f, "{}: division by zero", context)
            },
        }
    }
}
