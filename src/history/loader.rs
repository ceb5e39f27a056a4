//! Load historical rates from an Investing.com CSV export
//!
//! Expected columns: "Fecha" (dd.mm.yyyy) and "Último" (thousands-dot,
//! decimal-comma). A missing or unreadable file degrades to an empty series
//! so the projection can still run without historical data.

use super::HistoricalPoint;
use chrono::NaiveDate;
use csv::Reader;
use log::{debug, error, warn};
use std::io;
use std::path::Path;

/// Date format used by the Investing.com export
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Raw CSV row matching the export columns (extra columns are ignored)
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Fecha")]
    fecha: String,
    #[serde(rename = "Último")]
    ultimo: String,
}

/// Parse a decimal written in the "1.234,56" convention
/// (period as thousands separator, comma as decimal separator)
pub fn parse_locale_decimal(s: &str) -> Option<f64> {
    let normalized = s.trim().replace('.', "").replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

/// Load the historical series from a CSV file, ordered by date ascending
///
/// Never fails past this boundary: a missing file logs a warning and any
/// other read error logs an error, both returning an empty series.
pub fn load_history<P: AsRef<Path>>(path: P) -> Vec<HistoricalPoint> {
    let path = path.as_ref();
    let mut reader = match Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => {
            if is_not_found(&err) {
                warn!(
                    "historical file {} not found, continuing without historical data",
                    path.display()
                );
            } else {
                error!("could not open historical file {}: {}", path.display(), err);
            }
            return Vec::new();
        }
    };
    read_points(&mut reader)
}

/// Load the historical series from any reader (e.g., string buffer)
pub fn load_history_from_reader<R: io::Read>(reader: R) -> Vec<HistoricalPoint> {
    let mut csv_reader = Reader::from_reader(reader);
    read_points(&mut csv_reader)
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound
    )
}

fn read_points<R: io::Read>(reader: &mut Reader<R>) -> Vec<HistoricalPoint> {
    let mut points = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = match result {
            Ok(row) => row,
            Err(err) => {
                // Structural errors (bad headers, broken records) abort the
                // whole load; the caller proceeds with an empty series
                error!("error reading historical CSV: {}", err);
                return Vec::new();
            }
        };

        let date = match NaiveDate::parse_from_str(row.fecha.trim(), DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                debug!("skipping row with unparseable date {:?}", row.fecha);
                continue;
            }
        };

        // A bad rate keeps the row with a null value rather than failing
        let rate = parse_locale_decimal(&row.ultimo);
        if rate.is_none() {
            debug!("rate {:?} on {} did not parse, keeping row as null", row.ultimo, date);
        }

        points.push(HistoricalPoint { date, rate });
    }

    points.sort_by_key(|p| p.date);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = "\
Fecha,Último,Apertura,% var.
16.04.2025,\"1.077,50\",\"1.080,00\",\"-0,23%\"
15.04.2025,\"1.080,00\",\"1.078,00\",\"0,19%\"
14.04.2025,\"1.078,00\",\"1.075,00\",\"0,28%\"
";

    #[test]
    fn test_parse_locale_decimal() {
        assert_eq!(parse_locale_decimal("1.234,56"), Some(1234.56));
        assert_eq!(parse_locale_decimal("980,50"), Some(980.50));
        assert_eq!(parse_locale_decimal(" 1.077,50 "), Some(1077.50));
        assert_eq!(parse_locale_decimal("1077"), Some(1077.0));
        assert_eq!(parse_locale_decimal("n/a"), None);
        assert_eq!(parse_locale_decimal(""), None);
    }

    #[test]
    fn test_load_sample_ordered_by_date() {
        let points = load_history_from_reader(SAMPLE.as_bytes());
        assert_eq!(points.len(), 3);

        // Export lists newest first; loader returns ascending order
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2025, 4, 14).unwrap());
        assert_eq!(points[2].date, NaiveDate::from_ymd_opt(2025, 4, 16).unwrap());
        assert_relative_eq!(points[0].rate.unwrap(), 1078.00);
        assert_relative_eq!(points[2].rate.unwrap(), 1077.50);
    }

    #[test]
    fn test_bad_rate_becomes_null() {
        let csv = "Fecha,Último\n14.04.2025,\"1.078,00\"\n15.04.2025,n/a\n";
        let points = load_history_from_reader(csv.as_bytes());
        assert_eq!(points.len(), 2);
        assert!(points[0].rate.is_some());
        assert_eq!(points[1].rate, None);
    }

    #[test]
    fn test_bad_date_drops_row() {
        let csv = "Fecha,Último\nno-date,\"1.078,00\"\n15.04.2025,\"1.080,00\"\n";
        let points = load_history_from_reader(csv.as_bytes());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
    }

    #[test]
    fn test_missing_columns_degrade_to_empty() {
        let csv = "Date,Close\n2025-04-14,1078.00\n";
        let points = load_history_from_reader(csv.as_bytes());
        assert!(points.is_empty());
    }

    #[test]
    fn test_missing_file_returns_empty() {
        let points = load_history("does/not/exist/usd-ars.csv");
        assert!(points.is_empty());
    }
}
