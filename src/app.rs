// src/app.rs
use absence_days_infra::{CachedTripSource, CredentialResolver, CsvTripSource, SheetTripSource};
use absence_days_ports::trip_source::TripSource;
use absence_days_shared_kernel::Result;
use absence_days_usecase::AssessEligibility;

use crate::config::{Config, SourceConfig};
use crate::output;

pub fn run(config: &Config) -> Result<()> {
    tracing::info!(date = %config.application_date, "running eligibility assessment");
    let source = build_source(config)?;

    match config.cache_ttl {
        Some(ttl) => {
            let cached = CachedTripSource::new(source, ttl);
            run_with_source(config, &cached)
        }
        None => run_with_source(config, &source),
    }
}

fn build_source(config: &Config) -> Result<Box<dyn TripSource>> {
    match &config.source {
        SourceConfig::Csv { path } => Ok(Box::new(CsvTripSource::new(path))),
        SourceConfig::Sheet {
            sheet_id,
            tab,
            credentials_file,
        } => {
            let credentials = CredentialResolver::standard(credentials_file.clone()).resolve()?;
            Ok(Box::new(SheetTripSource::new(sheet_id, tab, credentials)))
        }
    }
}

fn run_with_source(config: &Config, source: &dyn TripSource) -> Result<()> {
    if config.watch {
        watch_loop(config, source)
    } else {
        run_cycle(config, source)
    }
}

fn run_cycle(config: &Config, source: &dyn TripSource) -> Result<()> {
    let assessment = AssessEligibility::new(source).run(config.application_date)?;
    output::emit(&assessment, config.format)
}

/// Re-renders on an interval until interrupted. The TTL cache in front of
/// the source bounds how often the external data is actually refetched.
fn watch_loop(config: &Config, source: &dyn TripSource) -> Result<()> {
    loop {
        output::print_clear_screen();
        if let Err(e) = run_cycle(config, source) {
            eprintln!("Error in watch cycle: {e}");
        }
        std::thread::sleep(config.watch_interval);
    }
}
