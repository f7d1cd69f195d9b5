//! Least-squares regression for lead-to-sales trend fitting
//!
//! Fits `y = slope * x + intercept` over observed (x, y) pairs and reports
//! the coefficient of determination alongside the coefficients.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Fitted least-squares line over a set of (x, y) pairs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl LinearFit {
    /// Fit a least-squares line through the given (x, y) pairs.
    ///
    /// Requires at least two pairs. When every x value is identical the
    /// slope denominator vanishes; the slope is then defined as 0 rather
    /// than an error, and the intercept degenerates to the y mean. When
    /// every y value is identical the total sum of squares is 0 and
    /// `r_squared` comes out non-finite; callers must check
    /// `r_squared.is_finite()` before displaying it.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(MathError::InvalidInput(format!(
                "x and y must have the same length, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 points to fit a line".to_string(),
            ));
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            numerator += (xi - x_mean) * (yi - y_mean);
            denominator += (xi - x_mean) * (xi - x_mean);
        }

        // All-identical x values: fall back to a zero slope.
        let slope = if denominator != 0.0 {
            numerator / denominator
        } else {
            0.0
        };
        let intercept = y_mean - slope * x_mean;

        let mut ss_residual = 0.0;
        let mut ss_total = 0.0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let predicted = slope * xi + intercept;
            ss_residual += (predicted - yi).powi(2);
            ss_total += (yi - y_mean).powi(2);
        }
        // A zero total sum of squares propagates as a non-finite r_squared.
        let r_squared = 1.0 - ss_residual / ss_total;

        Ok(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Predicted y for the given x
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// x required to reach the given y along the fitted line.
    ///
    /// A flat line (zero slope) has no solution; the division then yields
    /// a non-finite value, which is returned as-is.
    pub fn x_for(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }
}
