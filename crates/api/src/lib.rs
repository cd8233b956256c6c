//! Public API traits and types for the gf65536 library
//!
//! This crate provides the public API surface for the gf65536 workspace: the
//! error type shared by every member crate and the trait that downstream
//! components (erasure coders, secret sharing) program against.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::FiniteField;
