//! # Polynomial Module
//!
//! Provides the [`Polynomial`] value type for single-variable polynomials over
//! Z_m and the [`PolyBuilder`] working copy used for in-place coefficient
//! manipulation.

pub mod builder;
pub mod value;

pub use builder::PolyBuilder;
pub use value::Polynomial;
