//! Per-period unit economics for marketing spend
//!
//! Raw IEEE division throughout: a degenerate denominator (zero leads or
//! zero sales) produces a non-finite value that callers surface rather
//! than mask.

/// Cost per lead: ad spend divided by leads generated
pub fn cost_per_lead(ad_spend: f64, leads: f64) -> f64 {
    ad_spend / leads
}

/// Cost per acquisition: ad spend divided by closed sales
pub fn cost_per_acquisition(ad_spend: f64, sales: f64) -> f64 {
    ad_spend / sales
}

/// Conversion rate: share of leads closed into sales, as a percentage
pub fn conversion_rate(sales: f64, leads: f64) -> f64 {
    (sales / leads) * 100.0
}
