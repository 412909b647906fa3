// crates/usecase/src/assess.rs
use absence_days_domain::{EligibilitySignals, EligibilityWindows, Trip};
use absence_days_ports::trip_source::{TripRowDto, TripSource};
use absence_days_shared_kernel::{ErrorContext, Result};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::dto::{EligibilityAssessment, TripBreakdown};
use crate::normalize;

/// Orchestrates one assessment: fetch rows, normalize them, derive the
/// rolling windows, compute the signals.
pub struct AssessEligibility<'a> {
    source: &'a dyn TripSource,
}

impl<'a> AssessEligibility<'a> {
    pub fn new(source: &'a dyn TripSource) -> Self {
        Self { source }
    }

    pub fn run(&self, application_date: NaiveDate) -> Result<EligibilityAssessment> {
        let rows = self.source.fetch_rows().context("fetching trip rows")?;
        let trips = normalize_rows(&rows);

        let windows = EligibilityWindows::anchored_to(application_date);
        let signals = EligibilitySignals::from_trips(&trips, &windows);

        Ok(EligibilityAssessment {
            application_date,
            twelve_month_window_start: windows.twelve_month.start(),
            five_year_window_start: windows.five_year.start(),
            anchor_day: windows.anchor_day,
            twelve_month_total: signals.twelve_month_total,
            five_year_total: signals.five_year_total,
            present_on_anchor_day: signals.present_on_anchor_day,
            within_twelve_month_limit: signals.within_twelve_month_limit(),
            within_five_year_limit: signals.within_five_year_limit(),
            trips: trips.into_iter().map(TripBreakdown::from).collect(),
        })
    }
}

/// Parses every row, dropping the ones the calculator must never see, and
/// orders the survivors latest departure first for display.
fn normalize_rows(rows: &[TripRowDto]) -> Vec<Trip> {
    let mut trips: Vec<Trip> = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match normalize::row_to_trip(row) {
            Ok(trip) => trips.push(trip),
            Err(err) => warn!(row = index + 1, %err, "dropping trip row"),
        }
    }
    trips.sort_by(|a, b| b.departure.cmp(&a.departure));
    debug!(kept = trips.len(), total = rows.len(), "normalized trip rows");
    trips
}
