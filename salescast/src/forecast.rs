//! Multi-period sales forecasts from planned lead volumes

use crate::data::FuturePeriod;
use crate::error::{ForecastError, Result};
use crate::model::RegressionModel;
use marketing_math::unit_economics;
use serde::{Deserialize, Serialize};

/// Minimum number of future periods for a meaningful forecast
pub const MIN_FORECAST_PERIODS: usize = 3;

/// Forecasted record for one future period.
///
/// Structurally mirrors an observation, with sales and ad spend computed
/// from the fitted model instead of observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodForecast {
    /// Period label
    pub period: String,
    /// Planned lead volume
    #[serde(rename = "x")]
    pub leads: f64,
    /// Predicted sales
    #[serde(rename = "y")]
    pub sales: f64,
    /// Imputed ad spend at the historical average cost per lead
    #[serde(rename = "adSpend")]
    pub ad_spend: f64,
    /// Cost per lead used for the imputation
    pub cpl: f64,
    /// Implied cost per acquisition
    pub cpa: f64,
    /// Implied conversion rate, as a percentage
    #[serde(rename = "conversionRate")]
    pub conversion_rate: f64,
}

/// Apply the fitted model across the planned periods, in input order.
///
/// Fewer than [`MIN_FORECAST_PERIODS`] periods is rejected outright; no
/// partial sequence is produced. A predicted sales figure of zero makes
/// that period's cost per acquisition non-finite, which is kept as
/// computed.
pub fn generate(
    periods: &[FuturePeriod],
    model: &RegressionModel,
    avg_cpl: f64,
) -> Result<Vec<PeriodForecast>> {
    if periods.len() < MIN_FORECAST_PERIODS {
        return Err(ForecastError::InsufficientForecastPoints {
            needed: MIN_FORECAST_PERIODS,
            got: periods.len(),
        });
    }

    let forecasts = periods
        .iter()
        .map(|entry| {
            let sales = model.predict_sales(entry.leads);
            let ad_spend = entry.leads * avg_cpl;

            PeriodForecast {
                period: entry.period.clone(),
                leads: entry.leads,
                sales,
                ad_spend,
                cpl: avg_cpl,
                cpa: unit_economics::cost_per_acquisition(ad_spend, sales),
                conversion_rate: unit_economics::conversion_rate(sales, entry.leads),
            }
        })
        .collect();

    Ok(forecasts)
}
