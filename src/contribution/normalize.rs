//! Row normalization shared by the snapshot loader and the sync command.

use std::collections::BTreeMap;

use super::day::{ContributionDay, RawDay};
use super::window::Window;

/// Normalizes raw rows into ascending, one-per-date records.
///
/// Rows without a usable date are dropped. When a date repeats, the last
/// row in input order wins.
pub fn normalize_rows<'a, I>(rows: I) -> Vec<ContributionDay>
where
    I: IntoIterator<Item = &'a RawDay>,
{
    by_date(rows).into_values().collect()
}

/// Normalizes rows and lays them over `window`.
///
/// The result has exactly one record per window date. Rows outside the
/// window are discarded and uncovered dates are zero-filled.
pub fn fill_window<'a, I>(rows: I, window: &Window) -> Vec<ContributionDay>
where
    I: IntoIterator<Item = &'a RawDay>,
{
    let mut known = by_date(rows);
    window
        .dates()
        .map(|date| known.remove(&date).unwrap_or_else(|| ContributionDay::empty(date)))
        .collect()
}

fn by_date<'a, I>(rows: I) -> BTreeMap<chrono::NaiveDate, ContributionDay>
where
    I: IntoIterator<Item = &'a RawDay>,
{
    let mut map = BTreeMap::new();
    for day in rows.into_iter().filter_map(RawDay::normalize) {
        map.insert(day.iso_date, day);
    }
    map
}
