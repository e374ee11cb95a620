//! Date range resolution.

use chrono::{NaiveDate, TimeDelta, Utc};

/// Number of days an open-ended range reaches back from its end.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// A range of dates for data retrieval.
///
/// Both bounds are inclusive and `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Resolves optional bounds against today's UTC date.
    ///
    /// A missing `end` becomes today, a missing `start` becomes
    /// `end - 365 days`, and a `start` after `end` is clamped to `end`.
    #[must_use]
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::resolve_at(start, end, Utc::now().date_naive())
    }

    /// Same as [`DateRange::resolve`] with an explicit "today".
    #[must_use]
    pub fn resolve_at(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Self {
        let end = end.unwrap_or(today);
        let start = start.unwrap_or_else(|| end - TimeDelta::days(DEFAULT_LOOKBACK_DAYS));
        Self {
            start: start.min(end),
            end,
        }
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_explicit_bounds() {
        let range = DateRange::resolve_at(
            Some(date(2019, 1, 1)),
            Some(date(2019, 12, 31)),
            date(2024, 6, 1),
        );
        assert_eq!(range.start, date(2019, 1, 1));
        assert_eq!(range.end, date(2019, 12, 31));
    }

    #[test]
    fn test_resolve_clamps_inverted_range() {
        let range = DateRange::resolve_at(
            Some(date(2020, 3, 10)),
            Some(date(2020, 3, 1)),
            date(2024, 6, 1),
        );
        assert_eq!(range.start, date(2020, 3, 1));
        assert_eq!(range.end, date(2020, 3, 1));
    }

    #[test]
    fn test_resolve_missing_end_is_today() {
        let today = date(2024, 6, 1);
        let range = DateRange::resolve_at(Some(date(2024, 1, 1)), None, today);
        assert_eq!(range.end, today);
        assert_eq!(range.start, date(2024, 1, 1));
    }

    #[test]
    fn test_resolve_missing_start_looks_back_a_year() {
        let range = DateRange::resolve_at(None, Some(date(2019, 12, 31)), date(2024, 6, 1));
        assert_eq!(range.start, date(2018, 12, 31));
        assert_eq!(range.end - range.start, TimeDelta::days(365));
    }

    #[test]
    fn test_resolve_leap_year_lookback() {
        // 2020 is a leap year, so 365 days back is not the same calendar day.
        let range = DateRange::resolve_at(None, Some(date(2020, 12, 31)), date(2024, 6, 1));
        assert_eq!(range.start, date(2020, 1, 1));
    }

    #[test]
    fn test_resolve_future_start_without_end() {
        let today = date(2024, 6, 1);
        let range = DateRange::resolve_at(Some(date(2025, 1, 1)), None, today);
        assert_eq!(range, DateRange::single_day(today));
    }

    #[test]
    fn test_resolve_uses_clock() {
        let before = Utc::now().date_naive();
        let range = DateRange::resolve(None, None);
        let after = Utc::now().date_naive();

        assert!(range.end >= before && range.end <= after);
        assert_eq!(range.end - range.start, TimeDelta::days(DEFAULT_LOOKBACK_DAYS));
    }

    #[test]
    fn test_total_days_and_contains() {
        let range = DateRange::resolve_at(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)), date(2024, 6, 1));
        assert_eq!(range.total_days(), 31);
        assert!(range.contains(date(2024, 1, 15)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert_eq!(range.to_string(), "2024-01-01 to 2024-01-31");
    }
}
