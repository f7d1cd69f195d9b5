//! JSON persistence for session state
//!
//! Two logical records, each stored as one JSON document in a
//! caller-supplied directory: `historical-data` for observations and
//! `future-periods` for planned periods. Absent records load as empty
//! collections.

use crate::data::{FuturePeriod, Observation, ObservationSet};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Logical record name for stored observations
pub const HISTORICAL_DATA_KEY: &str = "historical-data";
/// Logical record name for stored future periods
pub const FUTURE_PERIODS_KEY: &str = "future-periods";

/// File-backed store for session records
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Persist the observation set under the `historical-data` record.
    pub fn save_history(&self, data: &ObservationSet) -> Result<()> {
        self.write_record(HISTORICAL_DATA_KEY, data.as_slice())
    }

    /// Load the stored observations, recomputing their derived metrics.
    ///
    /// An absent record is an empty history, not an error.
    pub fn load_history(&self) -> Result<Vec<Observation>> {
        let raw: Vec<Observation> = self.read_record(HISTORICAL_DATA_KEY)?;
        raw.into_iter().map(Observation::rederive).collect()
    }

    /// Persist the planned periods under the `future-periods` record.
    pub fn save_future_periods(&self, periods: &[FuturePeriod]) -> Result<()> {
        self.write_record(FUTURE_PERIODS_KEY, periods)
    }

    /// Load the stored future periods; absent is empty, not an error.
    pub fn load_future_periods(&self) -> Result<Vec<FuturePeriod>> {
        self.read_record(FUTURE_PERIODS_KEY)
    }

    /// Remove both stored records.
    pub fn clear(&self) -> Result<()> {
        for key in [HISTORICAL_DATA_KEY, FUTURE_PERIODS_KEY] {
            let path = self.record_path(key);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn write_record<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.record_path(key), json)?;
        Ok(())
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
