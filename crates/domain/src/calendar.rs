// crates/domain/src/calendar.rs
use chrono::{Datelike, NaiveDate};

/// The same calendar day `years` years before `date`.
///
/// 29 February maps to 28 February when the target year has no leap day.
/// Rolling windows anchor to the calendar day rather than a fixed 365-day
/// multiple, which keeps "this day N years ago" exact across leap years.
pub fn years_ago(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() - years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
        // Only 29 February can vanish; 28 February exists in every year.
        NaiveDate::from_ymd_opt(year, 2, 28).expect("28 February exists in every year")
    })
}
