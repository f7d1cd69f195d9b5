//! Owned session state tying the repository, model and forecasts together
//!
//! Every repository mutation runs as a mutate-then-refit transaction: the
//! model is recomputed in full before the call returns, so a query never
//! sees a model that lags the data. There is no other shared state.

use crate::data::{FuturePeriod, Observation, ObservationSet};
use crate::error::{ForecastError, Result};
use crate::forecast::{self, PeriodForecast};
use crate::model::RegressionModel;
use crate::planner::{self, BudgetForecast, SalesForecast};
use crate::sample;
use crate::store::DataStore;

/// Mutable forecasting session owning the campaign history, the fitted
/// model, the planned periods and the last computed forecasts
#[derive(Debug, Clone, Default)]
pub struct ForecastSession {
    data: ObservationSet,
    model: Option<RegressionModel>,
    future_periods: Vec<FuturePeriod>,
    forecasts: Vec<PeriodForecast>,
    budget_forecast: Option<BudgetForecast>,
    sales_forecast: Option<SalesForecast>,
}

impl ForecastSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from persisted observations and future periods.
    ///
    /// The model is refitted once on entry; persisted forecasts are not
    /// kept, as they are derived state.
    pub fn restore(
        observations: Vec<Observation>,
        future_periods: Vec<FuturePeriod>,
    ) -> Self {
        let mut session = Self {
            data: ObservationSet::from_observations(observations),
            future_periods,
            ..Self::default()
        };
        session.refit();
        session
    }

    /// Load a session from the given store; absent records load as empty.
    pub fn load(store: &DataStore) -> Result<Self> {
        Ok(Self::restore(
            store.load_history()?,
            store.load_future_periods()?,
        ))
    }

    /// Persist the session's observations and future periods.
    pub fn save(&self, store: &DataStore) -> Result<()> {
        store.save_history(&self.data)?;
        store.save_future_periods(&self.future_periods)
    }

    // A set below the fitting minimum has no model, never a stale one.
    fn refit(&mut self) {
        self.model = RegressionModel::fit(&self.data).ok();
    }

    /// Append an observation and refit the model.
    pub fn add_observation(&mut self, observation: Observation) {
        self.data.push(observation);
        self.refit();
    }

    /// Remove the observation at the given index and refit the model over
    /// the remainder.
    pub fn remove_observation(&mut self, index: usize) -> Result<Observation> {
        let removed = self.data.remove(index)?;
        self.refit();
        Ok(removed)
    }

    /// Reset the whole session: observations, model, planned periods and
    /// every computed forecast.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replace the campaign history with the reference sample set and refit.
    pub fn load_sample_data(&mut self) {
        self.data = ObservationSet::from_observations(sample::sample_observations());
        self.refit();
    }

    /// Append a future period entry
    pub fn add_future_period(&mut self, period: FuturePeriod) {
        self.future_periods.push(period);
    }

    /// Remove and return the future period at the given index.
    pub fn remove_future_period(&mut self, index: usize) -> Result<FuturePeriod> {
        if index >= self.future_periods.len() {
            return Err(ForecastError::OutOfRange {
                index,
                len: self.future_periods.len(),
            });
        }
        Ok(self.future_periods.remove(index))
    }

    /// The campaign history
    pub fn observations(&self) -> &ObservationSet {
        &self.data
    }

    /// The fitted model, absent below two observations
    pub fn regression(&self) -> Option<&RegressionModel> {
        self.model.as_ref()
    }

    /// The planned future periods, in insertion order
    pub fn future_periods(&self) -> &[FuturePeriod] {
        &self.future_periods
    }

    /// The forecasts from the last `generate_forecasts` call
    pub fn forecasts(&self) -> &[PeriodForecast] {
        &self.forecasts
    }

    /// The last computed budget forecast, if any
    pub fn budget_forecast(&self) -> Option<&BudgetForecast> {
        self.budget_forecast.as_ref()
    }

    /// The last computed sales-target forecast, if any
    pub fn sales_forecast(&self) -> Option<&SalesForecast> {
        self.sales_forecast.as_ref()
    }

    fn fitted_model(&self) -> Result<&RegressionModel> {
        self.model.as_ref().ok_or_else(|| {
            ForecastError::InsufficientData(
                "No fitted model: add at least 2 observations first".to_string(),
            )
        })
    }

    /// Predict the leads and sales obtainable with the given budget,
    /// remembering the result.
    pub fn forecast_from_budget(&mut self, budget: f64) -> Result<BudgetForecast> {
        let model = self.fitted_model()?;
        let result = planner::forecast_from_budget(model, &self.data, budget)?;
        self.budget_forecast = Some(result);
        Ok(result)
    }

    /// Compute the leads and budget required for the given sales target,
    /// remembering the result.
    pub fn forecast_from_sales_target(&mut self, target: f64) -> Result<SalesForecast> {
        let model = self.fitted_model()?;
        let result = planner::forecast_from_sales_target(model, &self.data, target)?;
        self.sales_forecast = Some(result);
        Ok(result)
    }

    /// Generate forecasts for every planned period, remembering and
    /// returning them.
    pub fn generate_forecasts(&mut self) -> Result<&[PeriodForecast]> {
        let model = self.fitted_model()?;
        let generated = forecast::generate(&self.future_periods, model, self.data.average_cpl())?;
        self.forecasts = generated;
        Ok(&self.forecasts)
    }
}
