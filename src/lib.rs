//! # gf65536
//!
//! Arithmetic in the finite field GF(2^16).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gf65536 = "0.3"
//! ```
//!
//! The default field needs no setup:
//!
//! ```
//! let product = gf65536::mul(0x1234, 0xbeef);
//! assert_eq!(gf65536::mul(product, gf65536::inv(0xbeef)), 0x1234);
//! ```
//!
//! Any other irreducible degree-16 modulus is validated once and then used
//! as a plain `Copy` value:
//!
//! ```
//! use gf65536::Field;
//!
//! let field = Field::new(0x1100b)?;
//! assert_eq!(field.mul(0x8000, 2), 0x100b);
//! assert!(Field::new(0x10020).is_err());
//! # Ok::<(), gf65536::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`Error`]
//! - `serde`: (de)serialization of [`Field`] as its modulus, validated on input
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gf65536-api`]: error type and the `FiniteField` trait
//! - [`gf65536-params`]: field dimensions and well-known moduli
//! - [`gf65536-algorithms`]: polynomial primitives, irreducibility test, field arithmetic

#![cfg_attr(not(feature = "std"), no_std)]

pub use gf65536_algorithms as algorithms;
pub use gf65536_api as api;
pub use gf65536_params as params;

pub use gf65536_algorithms::standard::{add, inv, mul};
pub use gf65536_algorithms::{poly, irreducible, Field, DEFAULT};
pub use gf65536_api::{Error, FiniteField, Result};

/// Common imports for gf65536 users
pub mod prelude {
    pub use crate::api::{Error, FiniteField, Result};
    pub use crate::algorithms::{Field, DEFAULT};
    pub use crate::params::{DEFAULT_MODULUS, FIELD_ORDER, WELL_KNOWN_MODULI};
}
