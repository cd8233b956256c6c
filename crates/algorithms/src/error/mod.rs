//! Error handling for field construction and arithmetic
//!
//! The error type itself lives in the API crate so that every member of the
//! workspace reports failures the same way; this module adds the validation
//! helpers the algorithms use to produce it.

pub mod validate;

pub use gf65536_api::error::{Error, Result};
