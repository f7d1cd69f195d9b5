//! Campaign history: observations, planned periods and aggregate statistics

use crate::error::{ForecastError, Result};
use marketing_math::unit_economics;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// One period of observed campaign history.
///
/// The derived metrics (cost per lead, cost per acquisition, conversion
/// rate) are always recomputed from the raw fields at construction and are
/// never edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    period: String,
    #[serde(rename = "x")]
    leads: f64,
    #[serde(rename = "y")]
    sales: f64,
    #[serde(rename = "adSpend")]
    ad_spend: f64,
    cpl: f64,
    cpa: f64,
    #[serde(rename = "conversionRate")]
    conversion_rate: f64,
}

impl Observation {
    /// Create an observation, computing its derived metrics.
    ///
    /// Leads and sales must be positive (the derived divisions require a
    /// non-zero denominator) and ad spend non-negative; a violation reports
    /// the offending field.
    pub fn new(
        period: impl Into<String>,
        leads: f64,
        sales: f64,
        ad_spend: f64,
    ) -> Result<Self> {
        if !leads.is_finite() || leads <= 0.0 {
            return Err(ForecastError::InvalidInput {
                field: "leads",
                value: leads.to_string(),
            });
        }
        if !sales.is_finite() || sales <= 0.0 {
            return Err(ForecastError::InvalidInput {
                field: "sales",
                value: sales.to_string(),
            });
        }
        if !ad_spend.is_finite() || ad_spend < 0.0 {
            return Err(ForecastError::InvalidInput {
                field: "adSpend",
                value: ad_spend.to_string(),
            });
        }

        Ok(Self {
            period: period.into(),
            leads,
            sales,
            ad_spend,
            cpl: unit_economics::cost_per_lead(ad_spend, leads),
            cpa: unit_economics::cost_per_acquisition(ad_spend, sales),
            conversion_rate: unit_economics::conversion_rate(sales, leads),
        })
    }

    /// Recompute the derived metrics from the raw fields.
    ///
    /// Used when taking records back from persistence, so stored derived
    /// values are never trusted over the raw ones.
    pub(crate) fn rederive(self) -> Result<Self> {
        Self::new(self.period, self.leads, self.sales, self.ad_spend)
    }

    /// Period label of the observation
    pub fn period(&self) -> &str {
        &self.period
    }

    /// Leads generated in the period
    pub fn leads(&self) -> f64 {
        self.leads
    }

    /// Sales closed in the period
    pub fn sales(&self) -> f64 {
        self.sales
    }

    /// Ad spend of the period
    pub fn ad_spend(&self) -> f64 {
        self.ad_spend
    }

    /// Cost per lead of the period
    pub fn cpl(&self) -> f64 {
        self.cpl
    }

    /// Cost per acquisition of the period
    pub fn cpa(&self) -> f64 {
        self.cpa
    }

    /// Conversion rate of the period, as a percentage
    pub fn conversion_rate(&self) -> f64 {
        self.conversion_rate
    }
}

/// A future period for which only the planned lead volume is known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturePeriod {
    /// Period label
    pub period: String,
    /// Planned lead volume
    #[serde(rename = "xValue")]
    pub leads: f64,
}

impl FuturePeriod {
    /// Create a future period entry
    pub fn new(period: impl Into<String>, leads: f64) -> Self {
        Self {
            period: period.into(),
            leads,
        }
    }
}

/// Ordered collection of historical observations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationSet {
    points: Vec<Observation>,
}

impl ObservationSet {
    /// Create an empty observation set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from existing observations, preserving their order
    pub fn from_observations(points: Vec<Observation>) -> Self {
        Self { points }
    }

    /// Append an observation
    pub fn push(&mut self, observation: Observation) {
        self.points.push(observation);
    }

    /// Remove and return the observation at the given index.
    pub fn remove(&mut self, index: usize) -> Result<Observation> {
        if index >= self.points.len() {
            return Err(ForecastError::OutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(index))
    }

    /// Remove every observation
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observation at the given index, if present
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.points.get(index)
    }

    /// All observations, in insertion order
    pub fn as_slice(&self) -> &[Observation] {
        &self.points
    }

    /// Iterator over the observations
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.points.iter()
    }

    /// Lead counts of every observation, in order
    pub fn leads(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.leads).collect()
    }

    /// Sales counts of every observation, in order
    pub fn sales(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sales).collect()
    }

    /// Average cost per lead over the set, 0 when empty
    pub fn average_cpl(&self) -> f64 {
        self.average_of(|p| p.cpl)
    }

    /// Average cost per acquisition over the set, 0 when empty
    pub fn average_cpa(&self) -> f64 {
        self.average_of(|p| p.cpa)
    }

    /// Average conversion rate over the set, 0 when empty
    pub fn average_conversion_rate(&self) -> f64 {
        self.average_of(|p| p.conversion_rate)
    }

    fn average_of(&self, metric: impl Fn(&Observation) -> f64) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(metric).mean()
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
