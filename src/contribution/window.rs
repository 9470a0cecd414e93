//! Trailing day windows and placeholder sequences.

use chrono::{Days, NaiveDate};

use super::day::ContributionDay;

/// Default window length: 52 full weeks.
pub const DEFAULT_DAYS: u32 = 364;

/// Longest window accepted anywhere: ten years of days.
pub const MAX_DAYS: u32 = 3660;

/// A trailing range of `days` calendar days ending on `end` (inclusive).
///
/// `len()` always equals the number of dates the window yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    days: u32,
}

impl Window {
    /// Creates the window of `days` days ending on `end`.
    ///
    /// The length is clamped to `1..=MAX_DAYS`, and shortened further if the
    /// start would fall before the earliest representable date.
    #[must_use]
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        let wanted = days.clamp(1, MAX_DAYS);
        let start =
            end.checked_sub_days(Days::new(u64::from(wanted - 1))).unwrap_or(NaiveDate::MIN);
        let span = end.signed_duration_since(start).num_days() + 1;
        Self { start, end, days: u32::try_from(span).unwrap_or(wanted) }
    }

    /// Number of days in the window.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.days
    }

    /// Always `false`; a window holds at least one day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Last date in the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// First date in the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns `true` if `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates the window's dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// An all-zero cell for every date in the window.
    #[must_use]
    pub fn placeholder(&self) -> Vec<ContributionDay> {
        self.dates().map(ContributionDay::empty).collect()
    }
}

/// Keeps the last `days` rows; `0` keeps everything.
#[must_use]
pub fn take_trailing<T>(mut rows: Vec<T>, days: usize) -> Vec<T> {
    if days > 0 && rows.len() > days {
        rows.drain(..rows.len() - days);
    }
    rows
}
