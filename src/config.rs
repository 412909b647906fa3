// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use absence_days_shared_kernel::{PresentationError, Result};
use absence_days_usecase::normalize;
use chrono::{Local, NaiveDate};

use crate::cli::args::Args;
use crate::output::OutputFormat;

/// Env var naming the spreadsheet to read when `--sheet-id` is absent.
pub const SHEET_ID_ENV: &str = "GOOGLE_SHEET_ID";
/// Env var naming the tab inside the spreadsheet.
pub const SHEET_TAB_ENV: &str = "GOOGLE_SHEET_TAB";
/// Env var carrying a default application date.
pub const APPLICATION_DATE_ENV: &str = "DEFAULT_APPLICATION_DATE";

const DEFAULT_TAB: &str = "trips";
const DEFAULT_WATCH_INTERVAL_SECS: u64 = 2;

/// Resolved runtime configuration, flags over environment over defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub application_date: NaiveDate,
    pub source: SourceConfig,
    pub format: OutputFormat,
    /// `None` disables caching entirely.
    pub cache_ttl: Option<Duration>,
    pub watch: bool,
    pub watch_interval: Duration,
}

/// Where trip rows come from.
#[derive(Debug, Clone)]
pub enum SourceConfig {
    Csv {
        path: PathBuf,
    },
    Sheet {
        sheet_id: String,
        tab: String,
        credentials_file: Option<PathBuf>,
    },
}

impl Config {
    pub fn resolve(args: Args) -> Result<Self> {
        let application_date = match args.date {
            Some(arg) => arg.0,
            None => default_application_date()?,
        };

        let source = resolve_source(&args)?;

        let cache_ttl = if args.no_cache {
            None
        } else {
            Some(Duration::from_secs(args.cache_ttl))
        };

        Ok(Self {
            application_date,
            source,
            format: args.format.into(),
            cache_ttl,
            watch: args.watch,
            watch_interval: Duration::from_secs(
                args.watch_interval.unwrap_or(DEFAULT_WATCH_INTERVAL_SECS),
            ),
        })
    }
}

fn default_application_date() -> Result<NaiveDate> {
    match env::var(APPLICATION_DATE_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            normalize::parse_date(&raw).ok_or_else(|| {
                PresentationError::InvalidValue {
                    flag: APPLICATION_DATE_ENV.to_string(),
                    value: raw.clone(),
                    reason: "expected YYYY-MM-DD or DD/MM/YYYY".to_string(),
                }
                .into()
            })
        }
        _ => Ok(Local::now().date_naive()),
    }
}

fn resolve_source(args: &Args) -> Result<SourceConfig> {
    if let Some(path) = &args.csv {
        return Ok(SourceConfig::Csv { path: path.clone() });
    }

    let Some(sheet_id) = args.sheet_id.clone().or_else(|| env_non_empty(SHEET_ID_ENV)) else {
        return Err(PresentationError::ConfigBuildFailed(
            "no trip source configured: pass --csv PATH, or --sheet-id/GOOGLE_SHEET_ID".to_string(),
        )
        .into());
    };

    let tab = args
        .tab
        .clone()
        .or_else(|| env_non_empty(SHEET_TAB_ENV))
        .unwrap_or_else(|| DEFAULT_TAB.to_string());

    Ok(SourceConfig::Sheet {
        sheet_id,
        tab,
        credentials_file: args.credentials.clone(),
    })
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
