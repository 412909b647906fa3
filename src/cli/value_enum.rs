// src/cli/value_enum.rs
use clap::ValueEnum;

use crate::output::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<OutputFormat> for CliOutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Table => CliOutputFormat::Table,
            OutputFormat::Json => CliOutputFormat::Json,
        }
    }
}
