// crates/infra/src/schema.rs
//! Header-based schema validation for tabular trip sources.
//!
//! Column names are fixed; sources are free to order, case, and pad them
//! however they like. A source missing a required column is rejected as a
//! whole rather than guessed at.

use absence_days_ports::trip_source::TripRowDto;
use absence_days_shared_kernel::{InfraResult, InfrastructureError};

pub const START_DATE_COLUMN: &str = "start_date";
pub const END_DATE_COLUMN: &str = "end_date";
pub const NOTE_COLUMN: &str = "note";

/// Resolved positions of the expected columns in a source header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    start_date: usize,
    end_date: usize,
    note: Option<usize>,
}

impl ColumnMap {
    /// Locates the expected columns in a header row, case-insensitively
    /// and ignoring surrounding whitespace.
    ///
    /// # Errors
    /// [`InfrastructureError::MissingColumn`] when `start_date` or
    /// `end_date` is absent. `note` stays optional.
    pub fn from_header(header: &[String]) -> InfraResult<Self> {
        let position =
            |name: &str| header.iter().position(|cell| cell.trim().eq_ignore_ascii_case(name));

        let start_date = position(START_DATE_COLUMN).ok_or_else(|| {
            InfrastructureError::MissingColumn {
                column: START_DATE_COLUMN.to_string(),
            }
        })?;
        let end_date = position(END_DATE_COLUMN).ok_or_else(|| {
            InfrastructureError::MissingColumn {
                column: END_DATE_COLUMN.to_string(),
            }
        })?;

        Ok(Self {
            start_date,
            end_date,
            note: position(NOTE_COLUMN),
        })
    }

    /// Maps one data row through the resolved columns.
    ///
    /// Short rows and blank cells yield `None` fields; nothing is rejected
    /// at this level.
    pub fn map_row(&self, row: &[String]) -> TripRowDto {
        let cell = |index: usize| {
            row.get(index)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        TripRowDto {
            departure: cell(self.start_date),
            return_date: cell(self.end_date),
            note: self.note.and_then(cell),
        }
    }

    /// Applies the schema to a full value grid, header row first.
    ///
    /// A grid with no data rows maps to no trips without touching the
    /// header at all, mirroring an empty source tab.
    ///
    /// # Errors
    /// Propagates [`InfrastructureError::MissingColumn`] from header
    /// validation once there is at least one data row.
    pub fn map_values(values: &[Vec<String>]) -> InfraResult<Vec<TripRowDto>> {
        if values.len() < 2 {
            return Ok(Vec::new());
        }
        let map = Self::from_header(&values[0])?;
        Ok(values[1..].iter().map(|row| map.map_row(row)).collect())
    }
}
