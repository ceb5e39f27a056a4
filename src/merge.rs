//! Left join of the projected band with the historical series
//!
//! Keyed on the projected dates: projected months with no matching
//! historical observation keep their row with a null historical value;
//! historical dates absent from the projection are dropped.

use crate::history::HistoricalPoint;
use crate::projection::BandSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the merged table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub date: NaiveDate,
    pub ceiling: f64,
    pub floor: f64,
    pub midpoint: f64,

    /// Observed rate on the projected date; `None` when no historical row matches
    pub historical: Option<f64>,
}

/// Left join keyed on the projected dates
pub fn merge_on_date(bands: &BandSeries, history: &[HistoricalPoint]) -> Vec<MergedRow> {
    // Last occurrence wins for duplicate historical dates
    let by_date: HashMap<NaiveDate, Option<f64>> =
        history.iter().map(|p| (p.date, p.rate)).collect();

    bands
        .points
        .iter()
        .map(|p| MergedRow {
            date: p.date,
            ceiling: p.ceiling,
            floor: p.floor,
            midpoint: p.midpoint,
            historical: by_date.get(&p.date).copied().flatten(),
        })
        .collect()
}
