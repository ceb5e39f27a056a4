//! Output structures for band projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single projected month of the band
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandPoint {
    /// Projected date (start date stepped by whole calendar months)
    pub date: NaiveDate,

    /// Upper bound, compounded up by the expansion rate each month
    pub ceiling: f64,

    /// Lower bound, compounded down by the expansion rate each month
    pub floor: f64,

    /// Constant reference value: average of the two initial bounds
    pub midpoint: f64,
}

/// Complete band projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSeries {
    /// Monthly band points, ordered by date
    pub points: Vec<BandPoint>,
}

impl BandSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Add a band point
    pub fn add_point(&mut self, point: BandPoint) {
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get summary statistics
    pub fn summary(&self) -> BandSummary {
        let first = self.points.first();
        let last = self.points.last();

        BandSummary {
            total_points: self.points.len() as u32,
            first_date: first.map(|p| p.date),
            last_date: last.map(|p| p.date),
            midpoint: first.map(|p| p.midpoint).unwrap_or(0.0),
            final_ceiling: last.map(|p| p.ceiling).unwrap_or(0.0),
            final_floor: last.map(|p| p.floor).unwrap_or(0.0),
        }
    }
}

impl Default for BandSeries {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a band projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSummary {
    pub total_points: u32,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub midpoint: f64,
    pub final_ceiling: f64,
    pub final_floor: f64,
}

impl BandSummary {
    /// Width of the band at the final projected month
    pub fn final_width(&self) -> f64 {
        self.final_ceiling - self.final_floor
    }
}
