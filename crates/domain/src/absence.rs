// crates/domain/src/absence.rs
//! Form AN whole-days-abroad counting.
//!
//! Only whole days abroad count: the day of departure and the day of return
//! are both excluded, so adjacent-day trips contribute nothing.

use absence_days_shared_kernel::DayCount;
use chrono::{Duration, NaiveDate};

use crate::interval::DateInterval;
use crate::trip::Trip;

/// Whole days abroad between a departure and a return date.
///
/// Returns zero when `return_date <= departure`; an inverted pair is
/// policy-defined as contributing no absence, not an error.
pub fn whole_days_abroad(departure: NaiveDate, return_date: NaiveDate) -> DayCount {
    if return_date <= departure {
        return DayCount::zero();
    }
    // num_days() >= 1 here, so the subtraction cannot underflow.
    DayCount::new(((return_date - departure).num_days() - 1) as u64)
}

/// The inclusive range of days that count as abroad: `departure + 1`
/// through `return_date - 1`. `None` exactly when [`whole_days_abroad`]
/// is zero.
pub fn countable_interval(departure: NaiveDate, return_date: NaiveDate) -> Option<DateInterval> {
    DateInterval::new(departure + Duration::days(1), return_date - Duration::days(1))
}

/// Sums the whole days abroad that fall inside `window`, over all trips.
///
/// Each trip's overlap with the window is summed independently. Overlapping
/// trips in the source data therefore count shared calendar days once per
/// trip, and the total can exceed the window's distinct day count.
pub fn count_absences_in_window(trips: &[Trip], window: DateInterval) -> DayCount {
    trips
        .iter()
        .filter_map(Trip::countable_interval)
        .filter_map(|interval| interval.overlap(window))
        .map(DateInterval::day_count)
        .sum()
}

/// Presence check for a single calendar day.
///
/// A day is abroad only when it lies strictly between a trip's departure
/// and return, which is exactly membership in the trip's countable
/// interval; the departure and return days themselves count as in the UK.
/// An empty trip list means present.
pub fn is_in_uk_on_day(trips: &[Trip], day: NaiveDate) -> bool {
    !trips
        .iter()
        .filter_map(Trip::countable_interval)
        .any(|interval| interval.contains(day))
}
