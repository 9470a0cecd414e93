//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, filesystem, the contribution API, snapshot
//! hosting, persisted UI state). Implementations live in `src/adapters/`.

pub mod calendar;
pub mod clock;
pub mod filesystem;
pub mod kv;
pub mod snapshot_source;

pub use calendar::{CalendarError, CalendarFuture, CalendarQuery, ContributionCalendar};
pub use clock::Clock;
pub use filesystem::FileSystem;
pub use kv::KeyValueStore;
pub use snapshot_source::{SnapshotSource, SourceError, SourceFuture};
