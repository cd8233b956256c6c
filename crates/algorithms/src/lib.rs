//! GF(2) polynomial primitives and GF(2^16) field arithmetic
//!
//! This crate provides a direct, reference-style implementation of the finite
//! field with 65536 elements:
//!
//! - [`poly`]: carry-less multiplication and long division of polynomials over
//!   GF(2), packed into machine words
//! - [`irreducible`]: trial-division irreducibility test used to validate moduli
//! - [`field`]: the validated, immutable [`Field`] handle and its arithmetic
//! - [`standard`]: the default field and free functions operating on it
//!
//! There are no lookup tables and no hardware carry-less multiply; every
//! operation is a pure function that is safe to call from any thread.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial arithmetic over GF(2)
pub mod poly;

// Modulus validation
pub mod irreducible;
pub use irreducible::{is_irreducible, is_reducible};

// GF(2^16)
pub mod field;
pub use field::Field;

pub mod standard;
pub use standard::DEFAULT;

// Trait seam shared with the API crate
pub use gf65536_api::FiniteField;
