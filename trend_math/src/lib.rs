//! # Trend Math
//!
//! Mathematical calculations for trend estimation over time series.
//! This crate provides the closed-form least-squares fit used to model
//! sales trends.

use thiserror::Error;

pub mod regression;

/// Errors that can occur in trend-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
