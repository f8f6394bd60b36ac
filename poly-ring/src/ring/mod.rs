//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_m and performing
//! modular arithmetic on scalar coefficients.

pub mod math;

/// Represents a polynomial coefficient sequence using a `Vec<i64>`.
pub type Coefficients = Vec<i64>;

pub use math::Ring;
