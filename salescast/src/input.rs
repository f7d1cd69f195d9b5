//! Parsing of user-entered form fields
//!
//! The presentation layer hands over raw strings; parsing failures are
//! reported per offending field and abort the operation with no state
//! change.

use crate::data::{FuturePeriod, Observation};
use crate::error::{ForecastError, Result};

/// Parse one numeric form field.
///
/// The value is trimmed first; a blank field counts as missing and is
/// reported the same way as a non-numeric one.
pub fn parse_field(field: &'static str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ForecastError::InvalidInput {
            field,
            value: raw.to_string(),
        });
    }

    trimmed.parse::<f64>().map_err(|_| ForecastError::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

fn parse_period(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ForecastError::InvalidInput {
            field: "period",
            value: raw.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Parse a full historical entry from raw form fields.
pub fn parse_observation(
    period: &str,
    leads: &str,
    sales: &str,
    ad_spend: &str,
) -> Result<Observation> {
    let period = parse_period(period)?;
    let leads = parse_field("leads", leads)?;
    let sales = parse_field("sales", sales)?;
    let ad_spend = parse_field("adSpend", ad_spend)?;

    Observation::new(period, leads, sales, ad_spend)
}

/// Parse a future-period entry from raw form fields.
pub fn parse_future_period(period: &str, leads: &str) -> Result<FuturePeriod> {
    Ok(FuturePeriod::new(
        parse_period(period)?,
        parse_field("leads", leads)?,
    ))
}
