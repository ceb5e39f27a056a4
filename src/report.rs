//! Formatted output for the merged projection
//!
//! Dates render as year-month and values to 2 decimal places, matching the
//! table view of the chart front-end. A missing historical value renders as
//! an empty field.

use crate::merge::MergedRow;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn format_historical(row: &MergedRow) -> String {
    row.historical.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

/// Render the merged series as a fixed-width console table
pub fn render_table(rows: &[MergedRow]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<8} {:>10} {:>10} {:>10} {:>12}",
        "Date", "Ceiling", "Floor", "Midpoint", "Historical"
    );
    let _ = writeln!(out, "{}", "-".repeat(54));

    for row in rows {
        let _ = writeln!(
            out,
            "{:<8} {:>10.2} {:>10.2} {:>10.2} {:>12}",
            row.date.format("%Y-%m"),
            row.ceiling,
            row.floor,
            row.midpoint,
            format_historical(row),
        );
    }

    out
}

/// Write the merged series as CSV
pub fn write_csv<P: AsRef<Path>>(rows: &[MergedRow], path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Date,Ceiling,Floor,Midpoint,Historical")?;
    for row in rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{}",
            row.date.format("%Y-%m"),
            row.ceiling,
            row.floor,
            row.midpoint,
            format_historical(row),
        )?;
    }

    Ok(())
}

/// Serialize the merged series as pretty JSON for an external display layer
pub fn to_json(rows: &[MergedRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
