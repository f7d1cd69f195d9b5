//! Utility helpers for period labels

use crate::error::{ForecastError, Result};
use chrono::{Months, NaiveDate};

/// Parse a `"Jan 2023"` style period label into a calendar date
/// (anchored to the first of the month).
pub fn parse_period_label(label: &str) -> Result<NaiveDate> {
    let padded = format!("01 {}", label.trim());
    NaiveDate::parse_from_str(&padded, "%d %b %Y").map_err(|_| ForecastError::InvalidInput {
        field: "period",
        value: label.to_string(),
    })
}

/// Format a date back into a `"Jan 2023"` style period label.
pub fn format_period_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Labels for the next `horizon` months after the given period label.
///
/// Useful for pre-populating future periods once the history ends at a
/// known month.
pub fn next_period_labels(last: &str, horizon: usize) -> Result<Vec<String>> {
    let start = parse_period_label(last)?;

    let mut labels = Vec::with_capacity(horizon);
    for offset in 1..=horizon {
        let month = start + Months::new(offset as u32);
        labels.push(format_period_label(month));
    }

    Ok(labels)
}
