// crates/usecase/src/normalize.rs
//! Row normalization at the load boundary.
//!
//! The absence calculator only ever sees fully parsed dates; rows that
//! fail here are dropped by the caller before assessment.

use absence_days_domain::Trip;
use absence_days_ports::trip_source::TripRowDto;
use absence_days_shared_kernel::{InfraResult, InfrastructureError};
use chrono::NaiveDate;

/// Textual date forms accepted from sources: ISO and UK.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parses a date accepting ISO (`YYYY-MM-DD`) or UK (`DD/MM/YYYY`) form,
/// ignoring surrounding whitespace. `None` when neither form matches.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Strict variant for call sites where a bad date is a hard error rather
/// than a droppable row (configuration values, defaults).
///
/// # Errors
/// [`InfrastructureError::DateParseFailure`] when neither accepted form
/// matches.
pub fn parse_date_strict(raw: &str) -> InfraResult<NaiveDate> {
    parse_date(raw).ok_or_else(|| InfrastructureError::DateParseFailure {
        value: raw.trim().to_string(),
    })
}

/// Converts one raw row into a domain trip.
///
/// # Errors
/// [`InfrastructureError::DateParseFailure`] when either date is missing
/// or unparseable; callers drop such rows rather than aborting the whole
/// source.
pub fn row_to_trip(row: &TripRowDto) -> InfraResult<Trip> {
    let departure = parse_date_strict(row.departure.as_deref().unwrap_or(""))?;
    let return_date = parse_date_strict(row.return_date.as_deref().unwrap_or(""))?;
    Ok(Trip::new(
        departure,
        return_date,
        row.note.clone().unwrap_or_default(),
    ))
}
