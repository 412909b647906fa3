// crates/domain/src/trip.rs
use absence_days_shared_kernel::DayCount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::interval::DateInterval;

/// A single round trip out of the UK.
///
/// Dates are calendar-accurate with no time-of-day component. Trips are
/// immutable once built; sources that cannot produce both dates must drop
/// the row before it gets here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// The day the traveller left the UK. Counted as a day in the UK.
    pub departure: NaiveDate,
    /// The day the traveller came back. Also counted as a day in the UK.
    pub return_date: NaiveDate,
    /// Free-form note carried through from the source row.
    pub note: String,
}

impl Trip {
    pub fn new(departure: NaiveDate, return_date: NaiveDate, note: impl Into<String>) -> Self {
        Self {
            departure,
            return_date,
            note: note.into(),
        }
    }

    /// Whole days abroad for this trip under the Form AN counting rule.
    pub fn whole_days_abroad(&self) -> DayCount {
        crate::absence::whole_days_abroad(self.departure, self.return_date)
    }

    /// The inclusive range of days this trip counts as abroad, if any.
    pub fn countable_interval(&self) -> Option<DateInterval> {
        crate::absence::countable_interval(self.departure, self.return_date)
    }
}
