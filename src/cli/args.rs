// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::parsers::DateArg;
use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "absence_days",
    version = crate::VERSION,
    about = "UK residency-absence eligibility signals from a travel trip log",
    group(
        clap::ArgGroup::new("trip_source")
            .args(&["csv", "sheet_id"])
            .multiple(false)
    )
)]
pub struct Args {
    /// Planned application date (YYYY-MM-DD or DD/MM/YYYY). Falls back to
    /// DEFAULT_APPLICATION_DATE, then today.
    #[arg(short = 'd', long, help_heading = "Assessment")]
    pub date: Option<DateArg>,

    /// Local CSV export with start_date, end_date and optional note columns
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Trip source")]
    pub csv: Option<PathBuf>,

    /// Spreadsheet id for the sheet values API (falls back to GOOGLE_SHEET_ID)
    #[arg(long, help_heading = "Trip source")]
    pub sheet_id: Option<String>,

    /// Tab holding the trip rows (falls back to GOOGLE_SHEET_TAB, then "trips")
    #[arg(long, help_heading = "Trip source")]
    pub tab: Option<String>,

    /// Credentials JSON file tried first in the provider chain
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Trip source")]
    pub credentials: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Seconds fetched trip rows stay fresh before the source is asked again
    #[arg(long, default_value_t = 60, help_heading = "Behaviour")]
    pub cache_ttl: u64,

    /// Always refetch from the trip source
    #[arg(long, conflicts_with = "cache_ttl", help_heading = "Behaviour")]
    pub no_cache: bool,

    /// Re-run the assessment on an interval until interrupted
    #[arg(short = 'w', long, help_heading = "Behaviour")]
    pub watch: bool,

    /// Seconds between watch cycles
    #[arg(long, requires = "watch", help_heading = "Behaviour")]
    pub watch_interval: Option<u64>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, help_heading = "Behaviour")]
    pub verbose: u8,
}
