//! Closed-form monthly projection of the expanding band

use super::series::{BandPoint, BandSeries};
use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

/// Configuration for a band projection run
#[derive(Debug, Clone, PartialEq)]
pub struct BandConfig {
    /// Initial upper bound of the band
    pub initial_ceiling: f64,

    /// Initial lower bound of the band
    pub initial_floor: f64,

    /// First projected month
    pub start_date: NaiveDate,

    /// Last projected month (inclusive, counted in whole calendar months)
    pub end_date: NaiveDate,

    /// Monthly expansion rate (0.01 = 1% per month)
    pub monthly_expansion: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            initial_ceiling: 1400.0,
            initial_floor: 1000.0,
            start_date: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2027, 1, 14).unwrap(),
            monthly_expansion: 0.01,
        }
    }
}

impl BandConfig {
    /// Check bounds and rate before projecting
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.initial_ceiling.is_finite()
            || !self.initial_floor.is_finite()
            || self.initial_ceiling <= 0.0
            || self.initial_floor <= 0.0
        {
            return Err(ProjectionError::InvalidBounds {
                ceiling: self.initial_ceiling,
                floor: self.initial_floor,
            });
        }
        if !self.monthly_expansion.is_finite() || self.monthly_expansion.abs() >= 1.0 {
            return Err(ProjectionError::InvalidExpansionRate(self.monthly_expansion));
        }
        Ok(())
    }

    /// Whole-month count from start to end, by year/month fields only.
    /// `None` when the end date precedes the start date.
    pub fn projected_months(&self) -> Option<u32> {
        let months = (self.end_date.year() - self.start_date.year()) * 12
            + (self.end_date.month() as i32 - self.start_date.month() as i32);
        u32::try_from(months).ok()
    }

    /// Constant midpoint: average of the two initial bounds
    pub fn midpoint(&self) -> f64 {
        (self.initial_ceiling + self.initial_floor) / 2.0
    }
}

/// Errors from invalid projection inputs
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("band bounds must be positive and finite (ceiling {ceiling}, floor {floor})")]
    InvalidBounds { ceiling: f64, floor: f64 },

    #[error("monthly expansion rate {0} must lie within (-1, 1)")]
    InvalidExpansionRate(f64),
}

/// Project the band from the start date through the end date, inclusive.
///
/// For month index i: ceiling compounds by (1+r)^i, floor by (1-r)^i, and
/// the midpoint stays at the average of the two initial bounds. Dates step
/// by exactly one calendar month (day-of-month clamps in short months).
/// An end date before the start date yields an empty series.
pub fn project_bands(config: &BandConfig) -> Result<BandSeries, ProjectionError> {
    config.validate()?;

    let mut series = BandSeries::new();
    let Some(months) = config.projected_months() else {
        return Ok(series);
    };

    let midpoint = config.midpoint();

    for i in 0..=months {
        let Some(date) = config.start_date.checked_add_months(Months::new(i)) else {
            break;
        };

        series.add_point(BandPoint {
            date,
            ceiling: config.initial_ceiling * (1.0 + config.monthly_expansion).powi(i as i32),
            floor: config.initial_floor * (1.0 - config.monthly_expansion).powi(i as i32),
            midpoint,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_point_count() {
        // 2025-04-14 through 2027-01-14 is 21 whole months, 22 points
        let series = project_bands(&BandConfig::default()).unwrap();
        assert_eq!(series.points.len(), 22);
        assert_eq!(series.points[0].date, NaiveDate::from_ymd_opt(2025, 4, 14).unwrap());
        assert_eq!(
            series.points.last().unwrap().date,
            NaiveDate::from_ymd_opt(2027, 1, 14).unwrap()
        );
    }

    #[test]
    fn test_initial_and_midpoint_values() {
        let series = project_bands(&BandConfig::default()).unwrap();
        let first = &series.points[0];

        assert_relative_eq!(first.ceiling, 1400.0);
        assert_relative_eq!(first.floor, 1000.0);
        for point in &series.points {
            assert_relative_eq!(point.midpoint, 1200.0);
        }
    }

    #[test]
    fn test_compounding_at_month_twelve() {
        let series = project_bands(&BandConfig::default()).unwrap();
        let month_12 = &series.points[12];

        assert_relative_eq!(month_12.ceiling, 1400.0 * 1.01f64.powi(12), epsilon = 1e-9);
        assert_relative_eq!(month_12.floor, 1000.0 * 0.99f64.powi(12), epsilon = 1e-9);
        assert_relative_eq!(month_12.ceiling, 1577.56, epsilon = 0.01);
        assert_relative_eq!(month_12.floor, 886.38, epsilon = 0.01);
    }

    #[test]
    fn test_dates_step_one_month() {
        let series = project_bands(&BandConfig::default()).unwrap();
        assert_eq!(series.points[1].date, NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
        assert_eq!(series.points[12].date, NaiveDate::from_ymd_opt(2026, 4, 14).unwrap());
    }

    #[test]
    fn test_month_end_clamps_in_short_months() {
        let config = BandConfig {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            ..Default::default()
        };
        let series = project_bands(&config).unwrap();
        assert_eq!(series.points[1].date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(series.points[2].date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn test_end_before_start_yields_empty() {
        let config = BandConfig {
            start_date: NaiveDate::from_ymd_opt(2027, 1, 14).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
            ..Default::default()
        };
        let series = project_bands(&config).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_same_month_yields_single_point() {
        let config = BandConfig {
            start_date: NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
            ..Default::default()
        };
        let series = project_bands(&config).unwrap();
        assert_eq!(series.points.len(), 1);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let config = BandConfig {
            initial_floor: 0.0,
            ..Default::default()
        };
        let err = project_bands(&config).unwrap_err();
        assert_eq!(err, ProjectionError::InvalidBounds { ceiling: 1400.0, floor: 0.0 });
    }

    #[test]
    fn test_invalid_expansion_rate_rejected() {
        let config = BandConfig {
            monthly_expansion: 1.0,
            ..Default::default()
        };
        let err = project_bands(&config).unwrap_err();
        assert_eq!(err, ProjectionError::InvalidExpansionRate(1.0));
    }
}
