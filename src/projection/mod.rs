//! Band projection: expanding ceiling/floor bounds with a constant midpoint

mod engine;
mod series;

pub use engine::{project_bands, BandConfig, ProjectionError};
pub use series::{BandPoint, BandSeries, BandSummary};
