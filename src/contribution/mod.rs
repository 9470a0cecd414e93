//! Contribution-calendar normalization.
//!
//! Turns GitHub calendar rows or snapshot entries into a uniform, ascending
//! sequence of [`ContributionDay`] records for heatmap rendering.

pub mod day;
pub mod level;
pub mod normalize;
pub mod snapshot;
pub mod username;
pub mod window;

pub use day::{ContributionDay, RawDay};
pub use level::{level_for_count, resolve_level, LevelHint, QualitativeLevel};
pub use normalize::{fill_window, normalize_rows};
pub use snapshot::{Snapshot, SnapshotDocument};
pub use username::extract_username;
pub use window::{take_trailing, Window, DEFAULT_DAYS, MAX_DAYS};
