use itertools::Itertools;

/// Prime factorization of `n` in ascending order, with multiplicity.
///
/// Returns an empty list for `n < 2`.
///
/// # Example
///
/// ```
/// # use poly_ring::numext::prime_factors;
/// assert_eq!(prime_factors(12), vec![2, 2, 3]);
/// assert_eq!(prime_factors(97), vec![97]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut rest = n;
    let mut d = 2;

    while d as u128 * d as u128 <= rest as u128 {
        while rest % d == 0 {
            factors.push(d);
            rest /= d;
        }
        d += 1;
    }

    if rest > 1 {
        factors.push(rest);
    }

    factors
}

/// The distinct prime factors of `n`, ascending.
///
/// # Example
///
/// ```
/// # use poly_ring::numext::prime_factors_unique;
/// assert_eq!(prime_factors_unique(12), vec![2, 3]);
/// ```
pub fn prime_factors_unique(n: u64) -> Vec<u64> {
    prime_factors(n).into_iter().dedup().collect()
}

/// Every divisor of `n`, ascending.
///
/// Enumerates the exponent vector of the prime factorization in odometer
/// order: each prime's exponent counts up to its multiplicity and carries into
/// the next prime. Returns an empty list for `n == 0`.
///
/// # Example
///
/// ```
/// # use poly_ring::numext::divisors;
/// assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
/// assert_eq!(divisors(8), vec![1, 2, 4, 8]);
/// assert_eq!(divisors(1), vec![1]);
/// ```
pub fn divisors(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }

    let grouped: Vec<(usize, u64)> = prime_factors(n).into_iter().dedup_with_count().collect();
    let mut exponents = vec![0usize; grouped.len()];
    let mut found = Vec::new();

    'enumerate: loop {
        let divisor = exponents
            .iter()
            .zip(&grouped)
            .map(|(&e, &(_, p))| p.pow(e as u32))
            .product::<u64>();
        found.push(divisor);

        for i in 0..exponents.len() {
            exponents[i] += 1;
            if exponents[i] <= grouped[i].0 {
                continue 'enumerate;
            }
            exponents[i] = 0;
        }
        break;
    }

    found.sort_unstable();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorization() {
        assert!(prime_factors(0).is_empty());
        assert!(prime_factors(1).is_empty());
        assert_eq!(prime_factors(2), vec![2]);
        assert_eq!(prime_factors(8), vec![2, 2, 2]);
        assert_eq!(prime_factors(60), vec![2, 2, 3, 5]);
        assert_eq!(prime_factors(97), vec![97]);
        assert_eq!(prime_factors(34171), vec![34171]);
    }

    #[test]
    fn test_factor_product_recombines() {
        for n in [2u64, 12, 36, 97, 360, 1024, 34170] {
            let product: u64 = prime_factors(n).iter().product();
            assert_eq!(product, n);
        }
    }

    #[test]
    fn test_unique_factors() {
        assert_eq!(prime_factors_unique(60), vec![2, 3, 5]);
        assert_eq!(prime_factors_unique(1024), vec![2]);
        assert!(prime_factors_unique(1).is_empty());
    }

    #[test]
    fn test_divisor_enumeration() {
        assert!(divisors(0).is_empty());
        assert_eq!(divisors(1), vec![1]);
        assert_eq!(divisors(7), vec![1, 7]);
        assert_eq!(divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert_eq!(
            divisors(60),
            vec![1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60]
        );
    }

    #[test]
    fn test_divisors_divide() {
        for n in [12u64, 97, 360, 8162] {
            for d in divisors(n) {
                assert_eq!(n % d, 0);
            }
        }
    }
}
