// crates/usecase/src/dto.rs
use absence_days_domain::Trip;
use absence_days_shared_kernel::DayCount;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-trip display row: the trip plus its whole-days-abroad figure.
#[derive(Debug, Clone, Serialize)]
pub struct TripBreakdown {
    pub departure: NaiveDate,
    pub return_date: NaiveDate,
    pub days_absent: DayCount,
    pub note: String,
}

impl From<Trip> for TripBreakdown {
    fn from(trip: Trip) -> Self {
        let days_absent = trip.whole_days_abroad();
        Self {
            departure: trip.departure,
            return_date: trip.return_date,
            days_absent,
            note: trip.note,
        }
    }
}

/// Everything the presentation layer needs for one application date.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityAssessment {
    pub application_date: NaiveDate,
    pub twelve_month_window_start: NaiveDate,
    pub five_year_window_start: NaiveDate,
    /// The day exactly five years before the application date.
    pub anchor_day: NaiveDate,
    pub twelve_month_total: DayCount,
    pub five_year_total: DayCount,
    pub present_on_anchor_day: bool,
    pub within_twelve_month_limit: bool,
    pub within_five_year_limit: bool,
    /// Latest departure first.
    pub trips: Vec<TripBreakdown>,
}
