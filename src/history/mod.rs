//! Historical exchange-rate series and CSV loading

pub mod loader;

pub use loader::{load_history, load_history_from_reader, parse_locale_decimal};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observed market rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Observation date
    pub date: NaiveDate,

    /// Observed rate; `None` when the source field did not parse
    pub rate: Option<f64>,
}
