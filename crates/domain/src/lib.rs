//! Pure absence calculator for the Form AN whole-days-abroad rule.
//!
//! Every operation in this crate is a stateless function over in-memory
//! calendar dates. The crate performs no I/O and never fails for
//! well-formed date input; a trip whose return date is on or before its
//! departure date simply contributes no absence.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod absence;
pub mod calendar;
pub mod eligibility;
pub mod interval;
pub mod trip;

pub use absence::{count_absences_in_window, countable_interval, is_in_uk_on_day, whole_days_abroad};
pub use calendar::years_ago;
pub use eligibility::{
    EligibilitySignals, EligibilityWindows, MAX_FIVE_YEAR_ABSENCE, MAX_TWELVE_MONTH_ABSENCE,
};
pub use interval::DateInterval;
pub use trip::Trip;
