//! Reporting periods

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Size class of a reporting window, derived from its length in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Custom,
}

/// Closed `[from, to]` interval at millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl TimeRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    /// Closed-interval membership
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.from && at <= self.to
    }

    /// Whole days elapsed between the bounds
    pub fn elapsed_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// Every calendar date touched by the range, in order
    pub fn days(&self) -> Vec<NaiveDate> {
        let last = self.to.date();
        self.from
            .date()
            .iter_days()
            .take_while(|d| *d <= last)
            .collect()
    }
}

/// The current window and the window it is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub current: TimeRange,
    pub previous: TimeRange,
    pub granularity: Granularity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_contains_is_closed() {
        let range = TimeRange::new(at(2024, 3, 1, 0, 0, 0), at(2024, 3, 31, 23, 59, 59));
        assert!(range.contains(at(2024, 3, 1, 0, 0, 0)));
        assert!(range.contains(at(2024, 3, 31, 23, 59, 59)));
        assert!(!range.contains(at(2024, 4, 1, 0, 0, 0)));
    }

    #[test]
    fn test_days_lists_each_calendar_date() {
        let range = TimeRange::new(at(2024, 2, 27, 0, 0, 0), at(2024, 3, 2, 23, 59, 59));
        let days = range.days();
        assert_eq!(days.len(), 5);
        assert_eq!(days[2], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
