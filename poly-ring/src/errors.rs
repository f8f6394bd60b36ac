#[derive(thiserror::Error, Debug)]
pub enum PolyRingError {
    /// Error when creating a ring or polynomial with an invalid modulus (m < 2).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when combining polynomials that live over different moduli.
    #[error("ModulusMismatch: {0}")]
    ModulusMismatch(String),
    /// Error when dividing by the zero polynomial.
    #[error("DivisionByZero: {0}")]
    DivisionByZero(String),
    /// Error when a required modular inverse or division-step quotient does
    /// not exist (the value shares a factor with the modulus).
    #[error("InverseNotFound: {0}")]
    InverseNotFound(String),
    /// Error when the exhaustive search over all monic candidates of a given
    /// degree finished without finding an irreducible polynomial.
    #[error("IrreducibleNotFound: {0}")]
    IrreducibleNotFound(String),
}
