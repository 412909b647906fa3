// crates/domain/src/eligibility.rs
//! Rolling eligibility windows and the Form AN absence limits.

use absence_days_shared_kernel::DayCount;
use chrono::NaiveDate;

use crate::absence::{count_absences_in_window, is_in_uk_on_day};
use crate::calendar::years_ago;
use crate::interval::DateInterval;
use crate::trip::Trip;

/// Maximum whole days abroad in the trailing 12 months.
pub const MAX_TWELVE_MONTH_ABSENCE: u64 = 90;

/// Maximum whole days abroad in the trailing 5 years.
pub const MAX_FIVE_YEAR_ABSENCE: u64 = 450;

/// The rolling windows and presence anchor derived from an application
/// date. Both windows end on the application date, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityWindows {
    pub twelve_month: DateInterval,
    pub five_year: DateInterval,
    /// The day exactly five years before the application date, on which
    /// the applicant must have been in the UK.
    pub anchor_day: NaiveDate,
}

impl EligibilityWindows {
    pub fn anchored_to(application_date: NaiveDate) -> Self {
        let anchor_day = years_ago(application_date, 5);
        Self {
            twelve_month: DateInterval::new(years_ago(application_date, 1), application_date)
                .expect("a day one year back never follows the application date"),
            five_year: DateInterval::new(anchor_day, application_date)
                .expect("a day five years back never follows the application date"),
            anchor_day,
        }
    }
}

/// The three eligibility signals for one application date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilitySignals {
    pub twelve_month_total: DayCount,
    pub five_year_total: DayCount,
    pub present_on_anchor_day: bool,
}

impl EligibilitySignals {
    pub fn from_trips(trips: &[Trip], windows: &EligibilityWindows) -> Self {
        Self {
            twelve_month_total: count_absences_in_window(trips, windows.twelve_month),
            five_year_total: count_absences_in_window(trips, windows.five_year),
            present_on_anchor_day: is_in_uk_on_day(trips, windows.anchor_day),
        }
    }

    pub fn within_twelve_month_limit(&self) -> bool {
        self.twelve_month_total.value() <= MAX_TWELVE_MONTH_ABSENCE
    }

    pub fn within_five_year_limit(&self) -> bool {
        self.five_year_total.value() <= MAX_FIVE_YEAR_ABSENCE
    }
}
