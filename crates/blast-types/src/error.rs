use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlastError {
    #[error("Invalid geometry: {name} must be positive, got {value}")]
    InvalidGeometry { name: &'static str, value: f64 },

    #[error("Invalid charge design: stemming {stemming_m} m exceeds hole length {hole_length_m} m")]
    InvalidChargeDesign { stemming_m: f64, hole_length_m: f64 },

    #[error("Bench slope angle {angle_deg}° has an undefined cotangent")]
    UndefinedSlope { angle_deg: f64 },

    #[error("Uniformity model domain violation: {0}")]
    InvalidUniformity(String),

    #[error("Loading input {name} must be positive, got {value}")]
    NonPositiveLoadingInput { name: &'static str, value: f64 },

    #[error("Rate {name} must be positive, got {value}")]
    NonPositiveRate { name: &'static str, value: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BlastResult<T> = Result<T, BlastError>;
