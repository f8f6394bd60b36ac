//! Implementation of coefficient ops using modular arithmetic.

use crate::errors::PolyRingError;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, PolyRingError> {
        if modulus <= 1 {
            return Err(PolyRingError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.modulus(), 7);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.normalize(15), 1);
    /// assert_eq!(ring.normalize(-3), 4);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(7), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.add(5, 4), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// assert_eq!(ring.add(9, 12), 0);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.sub(5, 3), 2);
    /// assert_eq!(ring.sub(3, 5), 5);
    /// assert_eq!(ring.sub(-2, 3), 2);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before
    /// the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.mul(3, 4), 5); // 12 mod 7 = 5
    /// assert_eq!(ring.mul(-2, 6), 2); // -12 mod 7 = 2
    /// assert_eq!(ring.mul(7, 5), 0);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.neg(3), 4);
    /// assert_eq!(ring.neg(0), 0);
    /// assert!(ring.add(3, ring.neg(3)) == 0);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        if a == 0 {
            return 0;
        }

        self.normalize(((-a as i128) % self.modulus as i128) as _)
    }

    /// Computes `base^exp mod modulus` by square-and-multiply.
    ///
    /// `pow(_, 0)` is 1, including `pow(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.pow(3, 4), 4); // 81 mod 7 = 4
    /// assert_eq!(ring.pow(5, 0), 1);
    /// assert_eq!(ring.pow(0, 0), 1);
    /// assert_eq!(ring.pow(-2, 3), 6); // (-8) mod 7 = 6
    /// ```
    pub fn pow(&self, base: i64, exp: u64) -> i64 {
        let mut result = 1;
        let mut b = self.normalize(base);
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, b);
            }
            b = self.mul(b, b);
            e >>= 1;
        }

        result
    }

    /// Searches `[0, modulus)` for the residue `q` with `a ≡ q * b (mod modulus)`.
    ///
    /// Returns `None` if no such residue exists, which can only happen when `b`
    /// shares a factor with a composite modulus. The search is linear in the
    /// modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.find_quotient(6, 5), Some(4)); // 5 * 4 = 20 ≡ 6
    ///
    /// let ring = Ring::try_with(6).unwrap();
    /// assert_eq!(ring.find_quotient(4, 2), Some(2));
    /// assert_eq!(ring.find_quotient(1, 2), None); // 2q mod 6 is never odd
    /// ```
    pub fn find_quotient(&self, a: i64, b: i64) -> Option<i64> {
        let a_norm = self.normalize(a);

        (0..self.modulus as i64).find(|&q| a_norm == self.mul(q, b))
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`. The search is
    /// exhaustive over `[0, modulus)` and therefore linear in the modulus.
    ///
    /// # Errors
    ///
    /// Returns `PolyRingError::InverseNotFound` if the inverse does not exist,
    /// which includes `a == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use poly_ring::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7); // 3 * 7 = 21 = 1 mod 10
    /// assert_eq!(ring.inv(9).unwrap(), 9); // 9 * 9 = 81 = 1 mod 10
    /// assert!(ring.inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, PolyRingError> {
        (0..self.modulus as i64)
            .find(|&x| self.mul(a, x) == 1)
            .ok_or_else(|| {
                PolyRingError::InverseNotFound(format!(
                    "Modular inverse does not exist for {} mod {}",
                    self.normalize(a),
                    self.modulus
                ))
            })
    }
}
