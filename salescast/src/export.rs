//! CSV export of generated forecasts

use crate::error::{ForecastError, Result};
use crate::forecast::PeriodForecast;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the exported forecast artifact
pub const EXPORT_FILE_NAME: &str = "sales-forecasts.csv";

/// Serialize forecasts as header-plus-rows CSV into the given writer.
///
/// Comma is the field separator; string fields containing a comma are
/// wrapped in double quotes. An empty sequence is rejected before anything
/// is written.
pub fn write_forecasts<W: io::Write>(forecasts: &[PeriodForecast], writer: W) -> Result<()> {
    if forecasts.is_empty() {
        return Err(ForecastError::NoForecastData);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for forecast in forecasts {
        csv_writer.serialize(forecast)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Export forecasts to `sales-forecasts.csv` in the given directory,
/// returning the path of the written file.
pub fn export_forecasts(
    forecasts: &[PeriodForecast],
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    if forecasts.is_empty() {
        return Err(ForecastError::NoForecastData);
    }

    let path = dir.as_ref().join(EXPORT_FILE_NAME);
    let file = File::create(&path)?;
    write_forecasts(forecasts, file)?;

    Ok(path)
}
