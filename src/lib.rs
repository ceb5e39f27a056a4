//! Band Projector - Exchange-rate band projection with historical comparison
//!
//! This library provides:
//! - Monthly projection of an expanding ceiling/floor band with a constant midpoint
//! - Locale-aware loading of historical rate CSV exports (dd.mm.yyyy dates,
//!   thousands-dot / decimal-comma numbers)
//! - Date-keyed left join of the projected and historical series
//! - Table, CSV, and JSON renderings of the merged result

pub mod history;
pub mod merge;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use history::{load_history, HistoricalPoint};
pub use merge::{merge_on_date, MergedRow};
pub use projection::{project_bands, BandConfig, BandPoint, BandSeries};
