use thiserror::Error;

/// Errors returned by curve construction, validation and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("field modulus must be greater than 3")]
    ModulusTooSmall,
    #[error("field modulus is not prime")]
    CompositeModulus,
    #[error("coefficient {coefficient} is not reduced modulo p")]
    CoefficientOutOfRange { coefficient: char },
    #[error("curve is singular: 4a^3 + 27b^2 = 0 mod p")]
    Singular,
    #[error("unknown curve `{0}`")]
    UnknownCurve(String),
    #[error("invalid hex for {field}: `{value}`")]
    InvalidHex { field: char, value: String },
}
