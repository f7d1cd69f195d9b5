//! Error types for the salescast crate

use thiserror::Error;

/// Custom error types for the salescast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A required input field was missing or not numeric
    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput {
        field: &'static str,
        value: String,
    },

    /// Fewer observations than a fit or inversion needs
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Fewer future periods than a forecast needs
    #[error("Insufficient forecast points: need at least {needed}, got {got}")]
    InsufficientForecastPoints { needed: usize, got: usize },

    /// Export requested with no generated forecasts
    #[error("No forecast data to export")]
    NoForecastData,

    /// Index outside the stored collection
    #[error("Index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Error from the underlying math primitives
    #[error("Math error: {0}")]
    Math(#[from] marketing_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV serialization
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
