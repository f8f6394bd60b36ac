use crate::poly::value::Polynomial;
use crate::ring::{Coefficients, Ring};

/// A mutable working copy of a polynomial's coefficient sequence.
///
/// The arithmetic value type is immutable; algorithms that need to overwrite
/// individual coefficients (the irreducible-candidate odometer, zero-padded
/// copies) work on a builder instead and turn it back into a canonical
/// [`Polynomial`] with [`finish`](PolyBuilder::finish). A builder is local to
/// the algorithm that created it and is never shared.
///
/// Stored values may leave `[0, modulus)` between a `set` and the next
/// [`reduce`](PolyBuilder::reduce); callers treat the `set`/`reduce` pair as
/// one scoped update.
#[derive(Debug, Clone)]
pub struct PolyBuilder {
    ring: Ring,
    coefficients: Coefficients,
}

impl PolyBuilder {
    pub(crate) fn with_ring(coefficients: Coefficients, ring: Ring) -> Self {
        Self { ring, coefficients }
    }

    /// Returns the coefficient at the given degree, 0 above the stored range.
    pub fn get(&self, degree: usize) -> i64 {
        if degree > self.degree_max() {
            return 0;
        }

        self.coefficients[self.degree_index(degree)]
    }

    /// Overwrites the coefficient at the given degree in place.
    ///
    /// Setting a degree strictly above the current maximum is a no-op; the
    /// builder never grows by index assignment.
    pub fn set(&mut self, degree: usize, value: i64) {
        if degree > self.degree_max() {
            return;
        }

        let index = self.degree_index(degree);
        self.coefficients[index] = value;
    }

    /// Re-applies the modulus to every stored coefficient. Idempotent.
    pub fn reduce(&mut self) {
        for c in self.coefficients.iter_mut() {
            *c = self.ring.normalize(*c);
        }
    }

    /// Returns the maximum degree of the working copy.
    pub fn degree_max(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient at the maximum degree.
    pub fn leading_coeff(&self) -> i64 {
        self.coefficients[0]
    }

    /// Reduces, strips leading zero terms and returns the canonical value.
    pub fn finish(self) -> Polynomial {
        Polynomial::with_ring(self.coefficients, self.ring)
    }

    fn degree_index(&self, degree: usize) -> usize {
        self.degree_max() - degree
    }
}
