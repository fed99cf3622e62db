//! Date/period resolution
//!
//! Turns the user's optional date range into the current window, the window
//! it is compared against, and a granularity label. "Now" is always passed
//! in by the caller.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use shared::models::{DateRange, Granularity, ReportPeriod, TimeRange};

/// Resolve the current/previous window pair
///
/// `from` is floored to the start of its day and `to` ceiled to the last
/// millisecond of its day. Without a range the current calendar month of
/// `now` is used. Inverted ranges are swapped rather than rejected.
pub fn resolve_period(range: Option<&DateRange>, now: NaiveDateTime) -> ReportPeriod {
    let (from, to) = match range {
        Some(r) if r.from <= r.to => (r.from, r.to),
        Some(r) => (r.to, r.from),
        None => month_bounds(now.date()),
    };

    let current = TimeRange::new(start_of_day(from), end_of_day(to));
    let granularity = classify(current.elapsed_days());
    let previous = shift_back(&current, granularity);

    ReportPeriod {
        current,
        previous,
        granularity,
    }
}

/// Granularity from whole elapsed days
pub fn classify(elapsed_days: i64) -> Granularity {
    match elapsed_days {
        i64::MIN..=0 => Granularity::Day,
        1..=7 => Granularity::Week,
        8..=31 => Granularity::Month,
        32..=93 => Granularity::Quarter,
        94..=366 => Granularity::Year,
        _ => Granularity::Custom,
    }
}

/// Shift a window back by one unit of its own granularity
///
/// Calendar units move the upper bound as an exclusive bound so whole months
/// map onto whole months (Mar 1..Mar 31 becomes Feb 1..Feb 29 in 2024).
/// `Custom` windows move by their elapsed whole days. Shifts that would leave
/// chrono's range clamp to its bounds.
pub fn shift_back(range: &TimeRange, granularity: Granularity) -> TimeRange {
    match granularity {
        Granularity::Day => shift_days(range, 1),
        Granularity::Week => shift_days(range, 7),
        Granularity::Month => shift_months(range, 1),
        Granularity::Quarter => shift_months(range, 3),
        Granularity::Year => shift_months(range, 12),
        Granularity::Custom => shift_days(range, range.elapsed_days()),
    }
}

fn shift_days(range: &TimeRange, days: i64) -> TimeRange {
    let Some(delta) = Duration::try_days(days) else {
        return TimeRange::new(NaiveDateTime::MIN, NaiveDateTime::MIN);
    };
    let back = |at: NaiveDateTime| at.checked_sub_signed(delta).unwrap_or(NaiveDateTime::MIN);
    TimeRange::new(back(range.from), back(range.to))
}

fn shift_months(range: &TimeRange, months: u32) -> TimeRange {
    let months = Months::new(months);
    let one_ms = Duration::milliseconds(1);
    let from = range
        .from
        .checked_sub_months(months)
        .unwrap_or(NaiveDateTime::MIN);
    let to = range
        .to
        .checked_add_signed(one_ms)
        .and_then(|end| end.checked_sub_months(months))
        .and_then(|end| end.checked_sub_signed(one_ms))
        .unwrap_or(from);
    TimeRange::new(from, to)
}

fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(day);
    (first, last)
}

pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub(crate) fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_milli)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: NaiveDate, to: NaiveDate) -> DateRange {
        DateRange::new(from, to)
    }

    #[test]
    fn test_default_is_current_calendar_month() {
        let now = date(2024, 2, 14).and_hms_opt(15, 30, 0).unwrap();
        let period = resolve_period(None, now);

        assert_eq!(period.current.from, start_of_day(date(2024, 2, 1)));
        assert_eq!(period.current.to, end_of_day(date(2024, 2, 29)));
        assert_eq!(period.granularity, Granularity::Month);
        assert_eq!(period.previous.from, start_of_day(date(2024, 1, 1)));
        assert_eq!(period.previous.to, end_of_day(date(2024, 1, 31)));
    }

    #[test]
    fn test_month_shift_lands_on_leap_day() {
        let now = date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let period = resolve_period(Some(&range(date(2024, 3, 1), date(2024, 3, 31))), now);

        assert_eq!(period.granularity, Granularity::Month);
        assert_eq!(period.previous.from, start_of_day(date(2024, 2, 1)));
        assert_eq!(period.previous.to, end_of_day(date(2024, 2, 29)));
    }

    #[test]
    fn test_thirty_day_month_maps_to_whole_previous_month() {
        let now = date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let period = resolve_period(Some(&range(date(2024, 4, 1), date(2024, 4, 30))), now);

        assert_eq!(period.previous.from, start_of_day(date(2024, 3, 1)));
        assert_eq!(period.previous.to, end_of_day(date(2024, 3, 31)));
    }

    #[test]
    fn test_single_day_is_day_granularity() {
        let now = date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let period = resolve_period(Some(&range(date(2024, 3, 1), date(2024, 3, 1))), now);

        assert_eq!(period.granularity, Granularity::Day);
        assert_eq!(period.previous.from, start_of_day(date(2024, 2, 29)));
        assert_eq!(period.previous.to, end_of_day(date(2024, 2, 29)));
    }

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(classify(0), Granularity::Day);
        assert_eq!(classify(1), Granularity::Week);
        assert_eq!(classify(7), Granularity::Week);
        assert_eq!(classify(8), Granularity::Month);
        assert_eq!(classify(31), Granularity::Month);
        assert_eq!(classify(32), Granularity::Quarter);
        assert_eq!(classify(93), Granularity::Quarter);
        assert_eq!(classify(94), Granularity::Year);
        assert_eq!(classify(366), Granularity::Year);
        assert_eq!(classify(367), Granularity::Custom);
    }

    #[test]
    fn test_week_shift_is_seven_days() {
        let now = date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let period = resolve_period(Some(&range(date(2024, 3, 4), date(2024, 3, 10))), now);

        assert_eq!(period.granularity, Granularity::Week);
        assert_eq!(period.previous.from, start_of_day(date(2024, 2, 26)));
        assert_eq!(period.previous.to, end_of_day(date(2024, 3, 3)));
    }

    #[test]
    fn test_quarter_and_year_shift_by_calendar_months() {
        let now = date(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        let quarter = resolve_period(Some(&range(date(2024, 4, 1), date(2024, 6, 30))), now);
        assert_eq!(quarter.granularity, Granularity::Quarter);
        assert_eq!(quarter.previous.from, start_of_day(date(2024, 1, 1)));
        assert_eq!(quarter.previous.to, end_of_day(date(2024, 3, 31)));

        let year = resolve_period(Some(&range(date(2024, 1, 1), date(2024, 12, 31))), now);
        assert_eq!(year.granularity, Granularity::Year);
        assert_eq!(year.previous.from, start_of_day(date(2023, 1, 1)));
        assert_eq!(year.previous.to, end_of_day(date(2023, 12, 31)));
    }

    #[test]
    fn test_custom_shifts_by_elapsed_days() {
        let now = date(2025, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let period = resolve_period(Some(&range(date(2023, 1, 1), date(2024, 6, 30))), now);

        assert_eq!(period.granularity, Granularity::Custom);
        assert_eq!(period.current.elapsed_days(), 546);
        assert_eq!(period.previous.from, start_of_day(date(2021, 7, 4)));
        assert_eq!(period.previous.to, end_of_day(date(2023, 1, 1)));
    }

    #[test]
    fn test_extreme_range_does_not_overflow() {
        let now = date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let period = resolve_period(Some(&range(NaiveDate::MIN, NaiveDate::MAX)), now);

        assert_eq!(period.granularity, Granularity::Custom);
        assert_eq!(period.current.from, start_of_day(NaiveDate::MIN));
        assert_eq!(period.previous.from, NaiveDateTime::MIN);
        assert!(period.previous.to <= period.current.to);
    }

    #[test]
    fn test_month_shift_at_lower_bound_clamps() {
        let from = start_of_day(NaiveDate::MIN);
        let shifted = shift_back(&TimeRange::new(from, end_of_day(NaiveDate::MIN)), Granularity::Month);
        assert_eq!(shifted.from, NaiveDateTime::MIN);
        assert!(shifted.to >= shifted.from);
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let now = date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let period = resolve_period(Some(&range(date(2024, 3, 31), date(2024, 3, 1))), now);
        assert_eq!(period.current.from, start_of_day(date(2024, 3, 1)));
        assert_eq!(period.current.to, end_of_day(date(2024, 3, 31)));
    }
}
