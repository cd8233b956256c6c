//! Trait definitions for finite fields

pub mod field;

pub use field::FiniteField;
