//! Error types for the sales_forecast crate

use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The submitted records are missing required fields or carry an
    /// unparseable month
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Too few observations to determine a trend
    #[error("Insufficient data: need at least 2 points, got {0}")]
    InsufficientData(usize),

    /// Error from the underlying least-squares fit
    #[error("Math error: {0}")]
    Math(#[from] trend_math::MathError),

    /// Error from IO operations (durable model writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing a model
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
