// crates/infra/src/csv_source.rs
use std::path::PathBuf;

use absence_days_ports::trip_source::{TripRowDto, TripSource};
use absence_days_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

use crate::schema::ColumnMap;

/// Trip source reading a local CSV export.
///
/// The first record is the header; columns are located by name through
/// [`ColumnMap`], so exports with reordered or re-cased columns load fine.
#[derive(Debug, Clone)]
pub struct CsvTripSource {
    path: PathBuf,
}

impl CsvTripSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TripSource for CsvTripSource {
    fn fetch_rows(&self) -> Result<Vec<TripRowDto>> {
        let file = std::fs::File::open(&self.path).map_err(|source| {
            InfrastructureError::FileRead {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file);

        let mut values = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| InfrastructureError::SourceUnavailable {
                reason: format!("malformed CSV in {}: {err}", self.path.display()),
            })?;
            values.push(record.iter().map(str::to_owned).collect::<Vec<_>>());
        }

        let rows = ColumnMap::map_values(&values)?;
        debug!(rows = rows.len(), path = %self.path.display(), "loaded CSV trip rows");
        Ok(rows)
    }
}
