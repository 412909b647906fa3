// src/cli/parsers.rs
use chrono::NaiveDate;

/// Wrapper type to parse calendar-date arguments in ISO or UK form.
#[derive(Debug, Clone, Copy)]
pub struct DateArg(pub NaiveDate);

impl std::str::FromStr for DateArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_iso(s)
            .or_else(|| try_uk(s))
            .ok_or_else(|| format!("Cannot parse date: {s}"))
    }
}

fn try_iso(s: &str) -> Option<DateArg> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok().map(DateArg)
}

fn try_uk(s: &str) -> Option<DateArg> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok().map(DateArg)
}
