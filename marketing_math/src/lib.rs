//! # Marketing Math
//!
//! Mathematical primitives for marketing funnel analysis.
//! This crate provides the least-squares trend fit used for lead-to-sales
//! forecasting and the per-period unit-economics formulas (cost per lead,
//! cost per acquisition, conversion rate).

use thiserror::Error;

// Calculation modules
pub mod regression;
pub mod unit_economics;

/// Errors that can occur in marketing-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for marketing math operations
pub type Result<T> = std::result::Result<T, MathError>;
