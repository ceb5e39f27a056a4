//! Band Projector CLI
//!
//! Projects the expanding exchange-rate band and compares it against a
//! historical rate series loaded from CSV

use anyhow::Result;
use band_projector::{load_history, merge_on_date, project_bands, report, BandConfig};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "band_projector",
    about = "Project an expanding exchange-rate band and compare it against historical rates"
)]
struct Args {
    /// Path to the historical rates CSV (Investing.com export).
    /// Omit to project without historical data.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Initial ceiling of the band
    #[arg(long, default_value_t = 1400.0)]
    ceiling: f64,

    /// Initial floor of the band
    #[arg(long, default_value_t = 1000.0)]
    floor: f64,

    /// First projected month (YYYY-MM-DD)
    #[arg(long, default_value = "2025-04-14")]
    start_date: NaiveDate,

    /// Last projected month, inclusive (YYYY-MM-DD)
    #[arg(long, default_value = "2027-01-14")]
    end_date: NaiveDate,

    /// Monthly expansion rate (0.01 = 1%)
    #[arg(long, default_value_t = 0.01)]
    expansion_rate: f64,

    /// Write the merged series to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the merged series as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Print the merged data table
    #[arg(long)]
    table: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = BandConfig {
        initial_ceiling: args.ceiling,
        initial_floor: args.floor,
        start_date: args.start_date,
        end_date: args.end_date,
        monthly_expansion: args.expansion_rate,
    };

    let bands = project_bands(&config)?;

    let history = match &args.history {
        Some(path) => load_history(path),
        None => Vec::new(),
    };

    let merged = merge_on_date(&bands, &history);

    if args.json {
        println!("{}", report::to_json(&merged)?);
    } else {
        let summary = bands.summary();
        println!("Exchange-Rate Band Projection");
        println!("=============================\n");
        println!(
            "  Months:    {} ({} to {})",
            summary.total_points,
            summary.first_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            summary.last_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
        );
        println!("  Expansion: {:.2}% per month", config.monthly_expansion * 100.0);
        println!("  Midpoint:  {:.2}", summary.midpoint);
        println!(
            "  Final band: [{:.2}, {:.2}] (width {:.2})",
            summary.final_floor,
            summary.final_ceiling,
            summary.final_width(),
        );
        println!("  Historical points loaded: {}", history.len());

        if args.table {
            println!();
            print!("{}", report::render_table(&merged));
        }
    }

    if let Some(path) = &args.output {
        report::write_csv(&merged, path)?;
        println!("\nMerged series written to: {}", path.display());
    }

    Ok(())
}
