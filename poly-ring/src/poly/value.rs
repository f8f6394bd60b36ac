use core::fmt;

use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};

use crate::errors::PolyRingError;
use crate::poly::builder::PolyBuilder;
use crate::ring::{Coefficients, Ring};

/// A single-variable polynomial over the finite ring Z_m.
///
/// Coefficients are stored from the highest degree term down to the constant
/// term, so `coefficients()[0]` is the leading coefficient. Every stored value
/// lies in `[0, modulus)` and no leading coefficient is zero, except for the
/// zero polynomial which is exactly the one-element sequence `[0]`. Every
/// constructor and every arithmetic operation upholds this canonical form.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    ring: Ring,
    coefficients: Coefficients,
}

impl Polynomial {
    /// Create a new polynomial from coefficients in descending degree order.
    ///
    /// Every coefficient is reduced into `[0, modulus)` and leading zero terms
    /// are stripped (a single 0 is retained for the zero polynomial).
    ///
    /// # Errors
    ///
    /// Returns `PolyRingError::InvalidModulus` if `modulus < 2`.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::try_with(vec![0, 0, 2, 8], 5).unwrap();
    /// assert_eq!(p.degree_max(), 1);
    /// assert_eq!(p.to_string(), "2X+3");
    ///
    /// assert!(Polynomial::try_with(vec![1], 1).is_err());
    /// ```
    pub fn try_with(coefficients: Coefficients, modulus: u64) -> Result<Self, PolyRingError> {
        let ring = Ring::try_with(modulus)?;
        Ok(Self::with_ring(coefficients, ring))
    }

    /// Canonicalizing constructor for callers that already hold a valid ring.
    pub(crate) fn with_ring(coefficients: Coefficients, ring: Ring) -> Self {
        let mut normalized: Coefficients =
            coefficients.iter().map(|&c| ring.normalize(c)).collect();

        let leading = normalized.iter().take_while(|&&c| c == 0).count();
        let keep = leading.min(normalized.len().saturating_sub(1));
        normalized.drain(..keep);

        if normalized.is_empty() {
            normalized.push(0);
        }

        Self {
            ring,
            coefficients: normalized,
        }
    }

    /// Create the zero polynomial over Z_m.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let zero = Polynomial::zero(7).unwrap();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.to_string(), "0");
    /// ```
    pub fn zero(modulus: u64) -> Result<Self, PolyRingError> {
        Self::try_with(vec![0], modulus)
    }

    pub(crate) fn zero_of(ring: Ring) -> Self {
        Self::with_ring(vec![0], ring)
    }

    /// Create a degree-0 polynomial holding a single constant.
    pub fn constant(value: i64, modulus: u64) -> Result<Self, PolyRingError> {
        Self::try_with(vec![value], modulus)
    }

    pub(crate) fn constant_of(value: i64, ring: Ring) -> Self {
        Self::with_ring(vec![value], ring)
    }

    /// Create the monomial `X^degree` over Z_m.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::x_to(3, 5).unwrap();
    /// assert_eq!(p.to_string(), "X^3");
    /// assert_eq!(p.degree_max(), 3);
    /// ```
    pub fn x_to(degree: usize, modulus: u64) -> Result<Self, PolyRingError> {
        let ring = Ring::try_with(modulus)?;
        Ok(Self::x_to_of(degree, ring))
    }

    pub(crate) fn x_to_of(degree: usize, ring: Ring) -> Self {
        let mut coefficients = vec![0; degree + 1];
        coefficients[0] = 1;
        Self { ring, coefficients }
    }

    /// Returns the ring the coefficients live in.
    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// Returns the modulus of the polynomial.
    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    /// Returns the stored coefficients, highest degree first.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the maximum degree of the polynomial.
    ///
    /// The zero polynomial has degree 0.
    pub fn degree_max(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the leading coefficient.
    pub fn leading_coeff(&self) -> i64 {
        self.coefficients[0]
    }

    /// Returns whether the polynomial represents 0.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0
    }

    /// Returns the coefficient at the given degree.
    ///
    /// Degrees above the stored range are implicitly zero, never an error.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::try_with(vec![4, 1, 3, 6], 7).unwrap();
    /// assert_eq!(p.get(3), 4);
    /// assert_eq!(p.get(0), 6);
    /// assert_eq!(p.get(9), 0);
    /// ```
    pub fn get(&self, degree: usize) -> i64 {
        if degree > self.degree_max() {
            return 0;
        }

        self.coefficients[self.degree_index(degree)]
    }

    /// Index in the coefficient sequence of a certain degree.
    fn degree_index(&self, degree: usize) -> usize {
        self.degree_max() - degree
    }

    /// Enumerates the degrees from the maximum down to 0.
    ///
    /// The enumeration is finite, restartable and non-mutating. No accumulation
    /// in this crate depends on the order; all combining operations are
    /// commutative modular sums.
    pub fn degrees(&self) -> std::iter::Rev<std::ops::RangeInclusive<usize>> {
        (0..=self.degree_max()).rev()
    }

    /// Enumerates the degrees from 0 up to the maximum.
    pub fn degrees_asc(&self) -> std::ops::RangeInclusive<usize> {
        0..=self.degree_max()
    }

    pub(crate) fn test_same_modulus(&self, other: &Self) -> Result<(), PolyRingError> {
        if self.modulus() != other.modulus() {
            return Err(PolyRingError::ModulusMismatch(format!(
                "Operands must share a modulus, got {} and {}",
                self.modulus(),
                other.modulus()
            )));
        }

        Ok(())
    }

    /// Returns a new polynomial with every coefficient negated mod m.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::try_with(vec![2, 5], 7).unwrap();
    /// assert_eq!(p.neg().to_string(), "5X+2");
    /// ```
    pub fn neg(&self) -> Self {
        let coefficients = self.coefficients.iter().map(|&c| self.ring.neg(c)).collect();
        Self::with_ring(coefficients, self.ring)
    }

    /// Computes `self + other`.
    ///
    /// Missing high-degree terms on the shorter operand are treated as 0.
    ///
    /// # Errors
    ///
    /// Returns `PolyRingError::ModulusMismatch` if the operands live over
    /// different moduli.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let f = Polynomial::try_with(vec![1, 4], 5).unwrap();
    /// let g = Polynomial::try_with(vec![2, 3], 5).unwrap();
    /// assert_eq!(f.add(&g).unwrap().to_string(), "3X+2");
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self, PolyRingError> {
        self.test_same_modulus(other)?;
        Ok(self.zip_add(other))
    }

    /// Computes `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `PolyRingError::ModulusMismatch` if the operands live over
    /// different moduli.
    pub fn sub(&self, other: &Self) -> Result<Self, PolyRingError> {
        self.test_same_modulus(other)?;
        Ok(self.zip_sub(other))
    }

    /// Computes `self * other` by full convolution.
    ///
    /// The coefficient at result degree d is the modular sum over all degree
    /// pairs (i, j) with i + j = d.
    ///
    /// # Errors
    ///
    /// Returns `PolyRingError::ModulusMismatch` if the operands live over
    /// different moduli.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let f = Polynomial::try_with(vec![1, 1], 5).unwrap();
    /// let g = Polynomial::try_with(vec![1, 2], 5).unwrap();
    /// assert_eq!(f.mul(&g).unwrap().to_string(), "X^2+3X+2");
    /// ```
    pub fn mul(&self, other: &Self) -> Result<Self, PolyRingError> {
        self.test_same_modulus(other)?;
        Ok(self.convolve(other))
    }

    /// Adds a bare integer, treated as a degree-0 constant.
    pub fn add_scalar(&self, value: i64) -> Self {
        self.zip_add(&Self::constant_of(value, self.ring))
    }

    /// Subtracts a bare integer, treated as a degree-0 constant.
    pub fn sub_scalar(&self, value: i64) -> Self {
        self.zip_sub(&Self::constant_of(value, self.ring))
    }

    /// Multiplies by a bare integer, treated as a degree-0 constant.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::try_with(vec![1, 3], 5).unwrap();
    /// assert_eq!(p.mul_scalar(2).to_string(), "2X+1");
    /// ```
    pub fn mul_scalar(&self, value: i64) -> Self {
        self.convolve(&Self::constant_of(value, self.ring))
    }

    /// Degree-wise modular sum; operands are aligned from the constant term.
    fn zip_add(&self, other: &Self) -> Self {
        let ascending: Coefficients = self
            .coefficients
            .iter()
            .rev()
            .zip_longest(other.coefficients.iter().rev())
            .map(|pair| match pair {
                EitherOrBoth::Both(&a, &b) => self.ring.add(a, b),
                EitherOrBoth::Left(&a) | EitherOrBoth::Right(&a) => a,
            })
            .collect();

        Self::with_ring(ascending.into_iter().rev().collect(), self.ring)
    }

    /// Degree-wise modular difference; operands are aligned from the constant term.
    fn zip_sub(&self, other: &Self) -> Self {
        let ascending: Coefficients = self
            .coefficients
            .iter()
            .rev()
            .zip_longest(other.coefficients.iter().rev())
            .map(|pair| match pair {
                EitherOrBoth::Both(&a, &b) => self.ring.sub(a, b),
                EitherOrBoth::Left(&a) => a,
                EitherOrBoth::Right(&b) => self.ring.neg(b),
            })
            .collect();

        Self::with_ring(ascending.into_iter().rev().collect(), self.ring)
    }

    /// Full convolution over all degree pairs.
    fn convolve(&self, other: &Self) -> Self {
        let result_max = self.degree_max() + other.degree_max();
        let mut accumulated = vec![0i64; result_max + 1];

        for d_self in self.degrees() {
            for d_other in other.degrees() {
                let index = result_max - (d_self + d_other);
                let term = self.ring.mul(self.get(d_self), other.get(d_other));
                accumulated[index] = self.ring.add(accumulated[index], term);
            }
        }

        Self::with_ring(accumulated, self.ring)
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Each term is computed with modular exponentiation; the result is always
    /// in `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::try_with(vec![1, 0, 1], 5).unwrap(); // X^2 + 1
    /// assert_eq!(p.compute(2), 0);
    /// assert_eq!(p.compute(1), 2);
    /// ```
    pub fn compute(&self, x: i64) -> i64 {
        self.degrees().fold(0, |acc, d| {
            self.ring
                .add(acc, self.ring.mul(self.get(d), self.ring.pow(x, d as u64)))
        })
    }

    /// Returns the residues `r` in `[0, modulus)` with `compute(r) == 0`,
    /// ascending.
    ///
    /// Linear in the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::try_with(vec![1, 0, 1], 5).unwrap(); // X^2 + 1
    /// assert_eq!(p.zeros(), vec![2, 3]);
    ///
    /// let q = Polynomial::try_with(vec![1, 0, 1], 3).unwrap();
    /// assert!(q.zeros().is_empty());
    /// ```
    pub fn zeros(&self) -> Vec<i64> {
        (0..self.modulus() as i64)
            .filter(|&r| self.compute(r) == 0)
            .collect()
    }

    /// Returns a working copy zero-padded up to the requested degree.
    ///
    /// Never truncates; a degree at or below the current maximum yields an
    /// unpadded copy. The padded sequence is not canonical, so it is returned
    /// as a [`PolyBuilder`]; finishing the builder re-canonicalizes.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::poly::Polynomial;
    /// let p = Polynomial::try_with(vec![2, 3], 5).unwrap();
    /// let padded = p.extended_zeros(3);
    /// assert_eq!(padded.degree_max(), 3);
    /// assert_eq!(padded.get(3), 0);
    /// assert_eq!(padded.finish(), p);
    /// ```
    pub fn extended_zeros(&self, degree: usize) -> PolyBuilder {
        let mut coefficients = self.coefficients.clone();
        for _ in self.degree_max()..degree {
            coefficients.insert(0, 0);
        }

        PolyBuilder::with_ring(coefficients, self.ring)
    }

    /// Converts the polynomial into a mutable working copy.
    pub fn into_builder(self) -> PolyBuilder {
        PolyBuilder::with_ring(self.coefficients, self.ring)
    }

    /// String of a single term, coefficient 1 elided except at degree 0.
    fn term_str(&self, degree: usize) -> String {
        let coefficient = self.get(degree);
        let mut output = String::new();

        if coefficient > 1 || degree == 0 {
            output.push_str(&coefficient.to_string());
        }

        match degree {
            0 => {}
            1 => output.push('X'),
            _ => {
                output.push_str("X^");
                output.push_str(&degree.to_string());
            }
        }

        output
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .degrees()
            .filter(|&d| self.get(d) != 0)
            .map(|d| self.term_str(d))
            .collect();

        write!(f, "{}", terms.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::quickcheck;

    fn poly(coefficients: Vec<i8>, modulus: u64) -> Polynomial {
        let coefficients = coefficients.into_iter().map(i64::from).collect();
        Polynomial::try_with(coefficients, modulus).unwrap()
    }

    #[test]
    fn construction_reduces_and_strips() {
        let p = Polynomial::try_with(vec![0, 1, 10, -1, 0, 2, 3], 7).unwrap();
        assert_eq!(p.coefficients(), &[1, 3, 6, 0, 2, 3]);
        assert_eq!(p.degree_max(), 5);
        assert_eq!(p.leading_coeff(), 1);
    }

    #[test]
    fn construction_of_all_zero_input() {
        let p = Polynomial::try_with(vec![0, 0, 0], 5).unwrap();
        assert!(p.is_zero());
        assert_eq!(p.coefficients(), &[0]);
        assert_eq!(p.degree_max(), 0);

        let empty = Polynomial::try_with(vec![], 5).unwrap();
        assert_eq!(empty, p);
    }

    #[test]
    fn construction_rejects_invalid_modulus() {
        assert!(matches!(
            Polynomial::try_with(vec![1, 2], 1),
            Err(PolyRingError::InvalidModulus(_))
        ));
        assert!(matches!(
            Polynomial::try_with(vec![1, 2], 0),
            Err(PolyRingError::InvalidModulus(_))
        ));
    }

    #[test]
    fn equality_is_structural() {
        let a = poly(vec![4, 5], 10);
        let b = poly(vec![0, 4, 5], 10);
        let c = poly(vec![1, 1], 10);
        let d = poly(vec![4, 5], 9);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn sparse_get_above_degree() {
        let p = poly(vec![4, 1, 3, 6], 7);
        assert_eq!(p.get(3), 4);
        assert_eq!(p.get(2), 1);
        assert_eq!(p.get(1), 3);
        assert_eq!(p.get(0), 6);
        assert_eq!(p.get(4), 0);
        assert_eq!(p.get(100), 0);
    }

    #[test]
    fn degree_enumerations() {
        let p = poly(vec![1, 0, 0], 3);
        assert_eq!(p.degrees().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(p.degrees_asc().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn addition_of_mixed_degrees() {
        let a = poly(vec![4, 5], 10);
        let e = poly(vec![2, 0, 2, 1, 0], 10);

        let sum = a.add(&e).unwrap();
        assert_eq!(sum.coefficients(), &[2, 0, 2, 5, 5]);

        let diff = e.sub(&a).unwrap();
        assert_eq!(diff.coefficients(), &[2, 0, 2, 7, 5]);
    }

    #[test]
    fn addition_with_zero_returns_other_operand() {
        let f = poly(vec![2, 0, 1], 7);
        let zero = Polynomial::zero(7).unwrap();

        assert_eq!(f.add(&zero).unwrap(), f);
        assert_eq!(zero.add(&f).unwrap(), f);
        assert_eq!(f.sub(&zero).unwrap(), f);
        assert_eq!(zero.sub(&f).unwrap(), f.neg());
    }

    #[test]
    fn multiplication_by_zero_is_zero() {
        let f = poly(vec![2, 0, 1], 7);
        let zero = Polynomial::zero(7).unwrap();

        assert!(f.mul(&zero).unwrap().is_zero());
        assert!(zero.mul(&f).unwrap().is_zero());
    }

    #[test]
    fn multiplication_convolves() {
        // (X + 1)(X + 1) = X^2 + 2X + 1 mod 10
        let a = poly(vec![1, 1], 10);
        assert_eq!(a.mul(&a).unwrap().coefficients(), &[1, 2, 1]);

        // (2X + 5)(3X + 4) = 6X^2 + 23X + 20 = 6X^2 + 2X + 6 mod 7
        let f = poly(vec![2, 5], 7);
        let g = poly(vec![3, 4], 7);
        assert_eq!(f.mul(&g).unwrap().coefficients(), &[6, 2, 6]);
    }

    #[test]
    fn scalar_operands_lift_to_constants() {
        let a = poly(vec![4, 5], 10);
        assert_eq!(a.add_scalar(6).coefficients(), &[4, 1]);
        assert_eq!(a.sub_scalar(6).coefficients(), &[4, 9]);
        assert_eq!(a.mul_scalar(3).coefficients(), &[2, 5]);
        assert!(a.mul_scalar(0).is_zero());
    }

    #[test]
    fn mismatched_moduli_are_rejected() {
        let f = poly(vec![1, 1], 10);
        let g = poly(vec![1, 1], 9);

        assert!(matches!(
            f.add(&g),
            Err(PolyRingError::ModulusMismatch(_))
        ));
        assert!(matches!(
            f.sub(&g),
            Err(PolyRingError::ModulusMismatch(_))
        ));
        assert!(matches!(
            f.mul(&g),
            Err(PolyRingError::ModulusMismatch(_))
        ));
    }

    #[test]
    fn evaluation_uses_the_whole_term_list() {
        // 2X^3 + X + 6 mod 7 at x = 6: 432 + 6 + 6 = 444 ≡ 3
        let p = poly(vec![2, 0, 1, 6], 7);
        assert_eq!(p.compute(6), 3);
        assert_eq!(p.compute(0), 6);

        let zero = Polynomial::zero(7).unwrap();
        assert_eq!(zero.compute(4), 0);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(poly(vec![2, 0, 1, 1], 7).to_string(), "2X^3+X+1");
        assert_eq!(poly(vec![1, 0], 5).to_string(), "X");
        assert_eq!(poly(vec![3], 5).to_string(), "3");
        assert_eq!(poly(vec![1], 5).to_string(), "1");
        assert_eq!(Polynomial::zero(5).unwrap().to_string(), "0");
    }

    quickcheck! {
        fn prop_construction_is_canonical(coefficients: Vec<i8>, modulus_seed: u8) -> bool {
            let modulus = 2 + (modulus_seed % 29) as u64;
            let p = poly(coefficients, modulus);

            let in_range = p.coefficients().iter().all(|&c| 0 <= c && c < modulus as i64);
            let no_leading_zero = p.leading_coeff() != 0 || p.coefficients().len() == 1;

            in_range && no_leading_zero
        }

        fn prop_addition_commutes(f: Vec<i8>, g: Vec<i8>, modulus_seed: u8) -> bool {
            let modulus = 2 + (modulus_seed % 29) as u64;
            let f = poly(f, modulus);
            let g = poly(g, modulus);

            f.add(&g).unwrap() == g.add(&f).unwrap()
        }

        fn prop_addition_associates(f: Vec<i8>, g: Vec<i8>, h: Vec<i8>, modulus_seed: u8) -> bool {
            let modulus = 2 + (modulus_seed % 29) as u64;
            let f = poly(f, modulus);
            let g = poly(g, modulus);
            let h = poly(h, modulus);

            f.add(&g).unwrap().add(&h).unwrap() == f.add(&g.add(&h).unwrap()).unwrap()
        }

        fn prop_multiplication_distributes(f: Vec<i8>, g: Vec<i8>, h: Vec<i8>, modulus_seed: u8) -> bool {
            let modulus = 2 + (modulus_seed % 29) as u64;
            let f = poly(f, modulus);
            let g = poly(g, modulus);
            let h = poly(h, modulus);

            let lhs = f.mul(&g.add(&h).unwrap()).unwrap();
            let rhs = f.mul(&g).unwrap().add(&f.mul(&h).unwrap()).unwrap();

            lhs == rhs
        }

        fn prop_additive_inverse_cancels(f: Vec<i8>, modulus_seed: u8) -> bool {
            let modulus = 2 + (modulus_seed % 29) as u64;
            let f = poly(f, modulus);

            f.add(&f.neg()).unwrap().is_zero()
        }

        fn prop_subtraction_is_addition_of_negation(f: Vec<i8>, g: Vec<i8>, modulus_seed: u8) -> bool {
            let modulus = 2 + (modulus_seed % 29) as u64;
            let f = poly(f, modulus);
            let g = poly(g, modulus);

            f.sub(&g).unwrap() == f.add(&g.neg()).unwrap()
        }

        fn prop_evaluation_stays_in_range(f: Vec<i8>, x: i8, modulus_seed: u8) -> bool {
            let modulus = 2 + (modulus_seed % 29) as u64;
            let f = poly(f, modulus);
            let value = f.compute(i64::from(x));

            0 <= value && value < modulus as i64
        }
    }
}
