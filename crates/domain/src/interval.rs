// crates/domain/src/interval.rs
use absence_days_shared_kernel::DayCount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive closed range of calendar days.
///
/// `start <= end` is guaranteed by construction; an inverted pair is the
/// canonical representation of "no days at all" and maps to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(self) -> NaiveDate {
        self.start
    }

    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both bounds.
    pub fn day_count(self) -> DayCount {
        // end >= start by construction, so the difference is never negative.
        DayCount::new((self.end - self.start).num_days() as u64 + 1)
    }

    /// Intersection with another inclusive range, `None` when disjoint.
    pub fn overlap(self, other: Self) -> Option<Self> {
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }

    pub fn contains(self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(DateInterval::new(date(2023, 1, 2), date(2023, 1, 1)).is_none());
    }

    #[test]
    fn single_day_interval_counts_one() {
        let interval = DateInterval::new(date(2023, 1, 1), date(2023, 1, 1)).unwrap();
        assert_eq!(interval.day_count().value(), 1);
    }

    #[test]
    fn overlap_clips_to_the_tighter_bounds() {
        let a = DateInterval::new(date(2023, 1, 3), date(2023, 1, 9)).unwrap();
        let b = DateInterval::new(date(2023, 1, 1), date(2023, 1, 5)).unwrap();
        let overlap = a.overlap(b).unwrap();
        assert_eq!(overlap.start(), date(2023, 1, 3));
        assert_eq!(overlap.end(), date(2023, 1, 5));
        assert_eq!(overlap.day_count().value(), 3);
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = DateInterval::new(date(2023, 1, 1), date(2023, 1, 5)).unwrap();
        let b = DateInterval::new(date(2023, 1, 6), date(2023, 1, 9)).unwrap();
        assert!(a.overlap(b).is_none());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = DateInterval::new(date(2023, 3, 1), date(2023, 3, 20)).unwrap();
        let b = DateInterval::new(date(2023, 3, 10), date(2023, 4, 2)).unwrap();
        assert_eq!(a.overlap(b), b.overlap(a));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let interval = DateInterval::new(date(2023, 1, 2), date(2023, 1, 4)).unwrap();
        assert!(interval.contains(date(2023, 1, 2)));
        assert!(interval.contains(date(2023, 1, 4)));
        assert!(!interval.contains(date(2023, 1, 5)));
    }
}
