//! Constant values for GF(2^16) arithmetic
//!
//! This crate provides the field dimensions and the catalogue of degree-16
//! moduli shared across the gf65536 workspace.

#![no_std]

pub mod field;
pub mod moduli;

pub use field::*;
pub use moduli::{DEFAULT_MODULUS, WELL_KNOWN_MODULI};
