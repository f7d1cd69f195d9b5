//! Budget and sales-target planning over a fitted model
//!
//! The two inverse questions over the fitted lead-to-sales line: how many
//! leads and sales a budget buys, and how many leads and how much budget a
//! sales target requires. Both are pure functions of their inputs.

use crate::data::ObservationSet;
use crate::error::{ForecastError, Result};
use crate::model::RegressionModel;
use serde::{Deserialize, Serialize};

/// Predicted outcome of spending a given budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetForecast {
    /// Budget to spend
    pub budget: f64,
    /// Leads the budget buys at the historical average cost per lead
    pub leads: f64,
    /// Sales predicted for that lead volume
    pub sales: f64,
    /// Average cost per lead used for the conversion
    pub cpl: f64,
    /// Implied cost per acquisition
    pub cpa: f64,
}

/// Spend required to reach a given sales target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesForecast {
    /// Sales target to reach
    pub target: f64,
    /// Leads required along the fitted line
    pub leads: f64,
    /// Budget required at the historical average cost per lead
    pub budget: f64,
    /// Average cost per lead used for the conversion
    pub cpl: f64,
    /// Implied cost per acquisition
    pub cpa: f64,
}

/// Predict the leads and sales obtainable with the given budget.
///
/// Requires at least one observation for the average cost per lead. A zero
/// average cost per lead makes the lead count non-finite, and a zero
/// predicted sales figure makes the cost per acquisition non-finite; both
/// are returned as computed rather than clamped.
pub fn forecast_from_budget(
    model: &RegressionModel,
    data: &ObservationSet,
    budget: f64,
) -> Result<BudgetForecast> {
    if data.is_empty() {
        return Err(ForecastError::InsufficientData(
            "Budget forecasting requires historical observations".to_string(),
        ));
    }

    let avg_cpl = data.average_cpl();
    let leads = budget / avg_cpl;
    let sales = model.predict_sales(leads);

    Ok(BudgetForecast {
        budget,
        leads,
        sales,
        cpl: avg_cpl,
        cpa: budget / sales,
    })
}

/// Compute the leads and budget required to reach the given sales target.
///
/// A flat model (zero slope) cannot be inverted; the lead count then comes
/// out non-finite and is returned as computed.
pub fn forecast_from_sales_target(
    model: &RegressionModel,
    data: &ObservationSet,
    target: f64,
) -> Result<SalesForecast> {
    if data.is_empty() {
        return Err(ForecastError::InsufficientData(
            "Sales-target forecasting requires historical observations".to_string(),
        ));
    }

    let avg_cpl = data.average_cpl();
    let leads = model.required_leads(target);
    let budget = leads * avg_cpl;

    Ok(SalesForecast {
        target,
        leads,
        budget,
        cpl: avg_cpl,
        cpa: budget / target,
    })
}
