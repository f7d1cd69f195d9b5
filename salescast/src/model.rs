//! Lead-to-sales regression model fitted over the observation set

use crate::data::ObservationSet;
use crate::error::{ForecastError, Result};
use marketing_math::regression::LinearFit;
use serde::{Deserialize, Serialize};

/// Linear lead-to-sales model with its goodness of fit.
///
/// A model only exists for two or more observations; below that, fitting
/// fails and callers must treat the model as absent rather than reusing a
/// stale one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegressionModel {
    fit: LinearFit,
}

impl RegressionModel {
    /// Minimum observations for a defined fit
    pub const MIN_OBSERVATIONS: usize = 2;

    /// Fit the model over every observation in the set, from scratch.
    pub fn fit(data: &ObservationSet) -> Result<Self> {
        if data.len() < Self::MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData(format!(
                "Need at least {} observations to fit a model, got {}",
                Self::MIN_OBSERVATIONS,
                data.len()
            )));
        }

        let fit = LinearFit::fit(&data.leads(), &data.sales())?;
        Ok(Self { fit })
    }

    /// Slope of the fitted line
    pub fn slope(&self) -> f64 {
        self.fit.slope
    }

    /// Intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.fit.intercept
    }

    /// Coefficient of determination of the fit.
    ///
    /// Non-finite when every observed sales value is identical; check
    /// `is_finite()` before displaying.
    pub fn r_squared(&self) -> f64 {
        self.fit.r_squared
    }

    /// Predicted sales for the given lead volume
    pub fn predict_sales(&self, leads: f64) -> f64 {
        self.fit.predict(leads)
    }

    /// Lead volume required to reach the given sales along the fitted line.
    ///
    /// A flat model (zero slope) has no solution; the division then yields
    /// a non-finite value, which is returned as-is.
    pub fn required_leads(&self, target_sales: f64) -> f64 {
        self.fit.x_for(target_sales)
    }
}
