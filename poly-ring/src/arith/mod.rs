//! # Polynomial Arithmetic Module
//!
//! Field-level algorithms over [`Polynomial`] values: Euclidean long division,
//! the extended Euclidean algorithm, congruence testing, and irreducibility
//! testing and search.
//!
//! Every function checks first that its operands share a modulus and fails
//! with `ModulusMismatch` otherwise. Division relies on a per-degree residue
//! search that is only guaranteed to succeed for a prime modulus; that
//! precondition is documented, not enforced.

use crate::errors::PolyRingError;
use crate::poly::Polynomial;
use crate::ring::Ring;

/// Computes the quotient and remainder of `f / g` with
/// `f = g * quotient + remainder` and `degree(remainder) < degree(g)` or a
/// zero remainder.
///
/// Works the degree positions of `f` from the top down: at each position the
/// working remainder's coefficient is eliminated by searching `[0, modulus)`
/// for the residue `q` with `coeff ≡ q * leading_coeff(g)`. The search costs
/// O(modulus) per eliminated degree and always succeeds when the modulus is
/// prime. For a composite modulus a step can have no solution; that surfaces
/// as `InverseNotFound` rather than a silently truncated result.
///
/// # Errors
///
/// * `PolyRingError::ModulusMismatch` if `f` and `g` live over different moduli.
/// * `PolyRingError::DivisionByZero` if `g` is the zero polynomial.
/// * `PolyRingError::InverseNotFound` if a division step has no quotient
///   coefficient (possible only for a composite modulus).
///
/// # Example
///
/// ```
/// # use poly_ring::arith::long_division;
/// # use poly_ring::poly::Polynomial;
/// // (X^2 + 1) / (X + 2) mod 5: (X + 2)(X + 3) = X^2 + 5X + 6 ≡ X^2 + 1
/// let f = Polynomial::try_with(vec![1, 0, 1], 5).unwrap();
/// let g = Polynomial::try_with(vec![1, 2], 5).unwrap();
///
/// let (quotient, remainder) = long_division(&f, &g).unwrap();
/// assert_eq!(quotient, Polynomial::try_with(vec![1, 3], 5).unwrap());
/// assert!(remainder.is_zero());
/// ```
pub fn long_division(
    f: &Polynomial,
    g: &Polynomial,
) -> Result<(Polynomial, Polynomial), PolyRingError> {
    f.test_same_modulus(g)?;

    if g.is_zero() {
        return Err(PolyRingError::DivisionByZero(format!(
            "Cannot divide {} by the zero polynomial",
            f
        )));
    }

    let ring = f.ring();

    // g cannot divide f at all; everything stays in the remainder.
    if g.degree_max() > f.degree_max() {
        return Ok((Polynomial::zero_of(ring), f.clone()));
    }

    let degree_diff = f.degree_max() - g.degree_max();
    let mut quotient = Polynomial::zero_of(ring);
    let mut remainder = f.clone();

    // Every degree position g is missing compared to f, top down.
    for d in f.degrees().take(degree_diff + 1) {
        // All terms of f have been subtracted away; g divides f.
        if remainder.is_zero() {
            break;
        }

        let coeff_f = remainder.get(d);
        if coeff_f == 0 {
            continue;
        }

        let step_q = ring
            .find_quotient(coeff_f, g.leading_coeff())
            .ok_or_else(|| {
                PolyRingError::InverseNotFound(format!(
                    "No residue q satisfies {} = q * {} mod {} while dividing by {}",
                    coeff_f,
                    g.leading_coeff(),
                    ring.modulus(),
                    g
                ))
            })?;

        let step_term = Polynomial::x_to_of(d - g.degree_max(), ring).mul_scalar(step_q);
        quotient = quotient.add(&step_term)?;
        remainder = remainder.sub(&g.mul(&step_term)?)?;
    }

    Ok((quotient, remainder))
}

/// Finds the modular inverse of `a` modulo `modulus`.
///
/// Convenience wrapper over [`Ring::inv`] for callers that do not hold a ring
/// value; the search is exhaustive over `[0, modulus)`.
///
/// # Errors
///
/// * `PolyRingError::InvalidModulus` if `modulus < 2`.
/// * `PolyRingError::InverseNotFound` if `a` shares a factor with `modulus`.
///
/// # Example
///
/// ```
/// # use poly_ring::arith::mod_inverse;
/// assert_eq!(mod_inverse(3, 7).unwrap(), 5); // 3 * 5 = 15 ≡ 1
/// assert!(mod_inverse(2, 10).is_err());
/// ```
pub fn mod_inverse(a: i64, modulus: u64) -> Result<i64, PolyRingError> {
    Ring::try_with(modulus)?.inv(a)
}

/// Extended Euclidean algorithm over polynomials.
///
/// Returns `(x, y, d)` such that `x*f + y*g = d = gcd(f, g)` with `d` monic.
///
/// # Errors
///
/// Propagates any failure of the internal division steps, and
/// `PolyRingError::InverseNotFound` if the gcd's leading coefficient has no
/// modular inverse for the final normalization.
///
/// # Example
///
/// ```
/// # use poly_ring::arith::extended_euclid;
/// # use poly_ring::poly::Polynomial;
/// let f = Polynomial::try_with(vec![1, 0, 1], 5).unwrap(); // X^2 + 1
/// let g = Polynomial::try_with(vec![1, 1], 5).unwrap(); // X + 1
///
/// let (x, y, d) = extended_euclid(&f, &g).unwrap();
/// assert_eq!(d, Polynomial::try_with(vec![1], 5).unwrap());
///
/// let combined = x.mul(&f).unwrap().add(&y.mul(&g).unwrap()).unwrap();
/// assert_eq!(combined, d);
/// ```
pub fn extended_euclid(
    f: &Polynomial,
    g: &Polynomial,
) -> Result<(Polynomial, Polynomial, Polynomial), PolyRingError> {
    f.test_same_modulus(g)?;

    let ring = f.ring();
    let mut a = f.clone();
    let mut b = g.clone();
    let mut x = Polynomial::constant_of(1, ring);
    let mut y = Polynomial::zero_of(ring);
    let mut u = Polynomial::zero_of(ring);
    let mut v = Polynomial::constant_of(1, ring);

    // Iterative substitution; the loop guard rules out division by zero.
    while !b.is_zero() {
        let (q, r) = long_division(&a, &b)?;
        a = b;
        b = r;

        let x_prev = x;
        let y_prev = y;
        x = u.clone();
        y = v.clone();
        u = x_prev.sub(&q.mul(&u)?)?;
        v = y_prev.sub(&q.mul(&v)?)?;
    }

    // Normalize so the gcd comes out monic.
    let lc_inv = ring.inv(a.leading_coeff())?;
    let x_final = x.mul_scalar(lc_inv);
    let y_final = y.mul_scalar(lc_inv);
    let d = x_final.mul(f)?.add(&y_final.mul(g)?)?;

    Ok((x_final, y_final, d))
}

/// Returns whether `f ≡ g (mod h)`, i.e. whether `h` exactly divides `f - g`.
///
/// Division failures (`DivisionByZero`, `InverseNotFound`) are deliberately
/// reported as "not congruent" instead of being propagated.
///
/// # Errors
///
/// Returns `PolyRingError::ModulusMismatch` if the three operands do not all
/// share a modulus.
///
/// # Example
///
/// ```
/// # use poly_ring::arith::congruence;
/// # use poly_ring::poly::Polynomial;
/// // X^2 + 3X - 3 = (X + 1)(X + 2) mod 5, so X^2 + 3X ≡ 3 (mod X + 1)
/// let f = Polynomial::try_with(vec![1, 3, 0], 5).unwrap();
/// let g = Polynomial::try_with(vec![3], 5).unwrap();
/// let h = Polynomial::try_with(vec![1, 1], 5).unwrap();
///
/// assert!(congruence(&f, &g, &h).unwrap());
/// ```
pub fn congruence(
    f: &Polynomial,
    g: &Polynomial,
    h: &Polynomial,
) -> Result<bool, PolyRingError> {
    f.test_same_modulus(g)?;
    f.test_same_modulus(h)?;

    let diff = f.sub(g)?;

    match long_division(&diff, h) {
        Ok((_, remainder)) => Ok(remainder.is_zero()),
        Err(PolyRingError::DivisionByZero(_)) | Err(PolyRingError::InverseNotFound(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Returns whether the polynomial is irreducible.
///
/// Polynomials of degree 0 and 1 always are. For higher degrees the test is
/// root-freeness over `[0, modulus)`: a polynomial with a root splits off a
/// linear factor. For degree >= 4 this is necessary but not sufficient; a
/// root-free polynomial can still factor into two higher-degree irreducibles.
///
/// # Example
///
/// ```
/// # use poly_ring::arith::is_irreducible;
/// # use poly_ring::poly::Polynomial;
/// let p = Polynomial::try_with(vec![1, 0, 1], 3).unwrap(); // X^2 + 1
/// assert!(is_irreducible(&p));
///
/// let q = Polynomial::try_with(vec![1, 0, 1], 5).unwrap();
/// assert!(!is_irreducible(&q)); // 2^2 + 1 = 5 ≡ 0
/// ```
pub fn is_irreducible(p: &Polynomial) -> bool {
    if p.degree_max() < 2 {
        return true;
    }

    p.zeros().is_empty()
}

/// Searches for an irreducible polynomial of the given degree over Z_m.
///
/// Degree 1 trivially returns `X`. Otherwise the monic candidates are
/// enumerated in odometer order starting from `X^degree`: the constant term is
/// incremented, coefficients that reached the modulus carry into the next
/// higher degree, and the candidate is reduced again. The leading coefficient
/// overflowing (becoming 0 after reduction) is the natural termination signal:
/// every monic candidate has been tested.
///
/// The candidate space has `modulus^degree` elements and every test scans all
/// residues, so this is the most expensive operation in the crate.
///
/// # Errors
///
/// * `PolyRingError::InvalidModulus` if `modulus < 2`.
/// * `PolyRingError::IrreducibleNotFound` if the search exhausts all candidates.
///
/// # Example
///
/// ```
/// # use poly_ring::arith::find_irreducible;
/// # use poly_ring::poly::Polynomial;
/// let p = find_irreducible(2, 2).unwrap();
/// assert_eq!(p, Polynomial::try_with(vec![1, 1, 1], 2).unwrap()); // X^2 + X + 1
///
/// let x = find_irreducible(1, 9).unwrap();
/// assert_eq!(x, Polynomial::x_to(1, 9).unwrap());
/// ```
pub fn find_irreducible(degree: usize, modulus: u64) -> Result<Polynomial, PolyRingError> {
    let candidate = Polynomial::x_to(degree, modulus)?;

    // Degree 1 is always irreducible.
    if degree == 1 {
        return Ok(candidate);
    }

    let overflow = modulus as i64;
    let mut search = candidate.into_builder();

    loop {
        let tested = search.clone().finish();
        if is_irreducible(&tested) {
            return Ok(tested);
        }

        // Odometer step: bump the constant term, then carry upward.
        search.set(0, search.get(0) + 1);
        for d in 0..=search.degree_max() {
            if search.get(d) == overflow {
                search.set(d + 1, search.get(d + 1) + 1);
            }
        }
        search.reduce();

        if search.leading_coeff() == 0 {
            return Err(PolyRingError::IrreducibleNotFound(format!(
                "Checked every monic polynomial of degree {} modulo {}",
                degree, modulus
            )));
        }
    }
}
