//! Error types for biomat-explorer

use thiserror::Error;

/// Main error type for material and curve operations
#[derive(Error, Debug)]
pub enum MaterialsError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Elongation must lie in (0, 1], got {0}")]
    ElongationOutOfRange(f64),

    #[error(
        "Elastic strain at yield ({yield_strain}) must be strictly less than ultimate strain ({ultimate_strain})"
    )]
    YieldStrainNotBelowUltimate { yield_strain: f64, ultimate_strain: f64 },

    #[error("Invalid curve options: {0}")]
    InvalidOptions(String),

    #[error("Unknown material property '{0}'")]
    UnknownProperty(String),

    #[error("Material '{0}' not found")]
    MaterialNotFound(String),

    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for material and curve operations
pub type MaterialsResult<T> = Result<T, MaterialsError>;
