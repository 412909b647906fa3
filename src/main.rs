use std::process::ExitCode;

use absence_days::cli::args::Args;
use absence_days::config::Config;
use absence_days::{app, logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match Config::resolve(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
