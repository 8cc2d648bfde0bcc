use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbitStateError {
    #[error(
        "Kepler solver did not converge after {iterations} iterations (last estimate {last}, residual {residual:e})"
    )]
    KeplerNonConvergence {
        last: f64,
        residual: f64,
        iterations: usize,
    },

    #[error("Eccentricity {0} is outside the elliptical range [0, 1)")]
    InvalidEccentricity(f64),

    #[error("Semi-major axis must be strictly positive, got {0}")]
    InvalidSemiMajorAxis(f64),

    #[error("Non-finite orbital element: {0}")]
    NonFiniteElement(String),

    #[error("Unknown body in element catalog: {0}")]
    UnknownBody(String),

    #[error("Invalid UTC timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid state parameter: {0}")]
    InvalidStateParameter(String),

    #[error("Unable to parse element catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrbitStateError>;

impl PartialEq for OrbitStateError {
    fn eq(&self, other: &Self) -> bool {
        use OrbitStateError::*;
        match (self, other) {
            (
                KeplerNonConvergence {
                    last: l1,
                    residual: r1,
                    iterations: i1,
                },
                KeplerNonConvergence {
                    last: l2,
                    residual: r2,
                    iterations: i2,
                },
            ) => l1 == l2 && r1 == r2 && i1 == i2,
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (InvalidSemiMajorAxis(a), InvalidSemiMajorAxis(b)) => a == b,
            (NonFiniteElement(a), NonFiniteElement(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (InvalidTimestamp(a), InvalidTimestamp(b)) => a == b,
            (InvalidStateParameter(a), InvalidStateParameter(b)) => a == b,

            // Wrapped errors are not comparable: same variant is enough
            (CatalogParse(_), CatalogParse(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
