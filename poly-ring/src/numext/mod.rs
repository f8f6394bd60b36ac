//! # Number Extensions Module
//!
//! Standalone integer helpers: primality testing, prime factorization and
//! divisor enumeration. These have no data dependency on the polynomial
//! engine and are usable on their own.

pub mod factoring;
pub mod primes;

pub use factoring::{divisors, prime_factors, prime_factors_unique};
pub use primes::is_prime;
