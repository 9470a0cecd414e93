//! The GitHub activity heatmap: snapshot loading, card state, and grid layout.

pub mod card;
pub mod grid;
pub mod loader;

pub use card::{ActivityCard, ActivityStatus, CardState, LoadTicket};
pub use grid::{glyph, HeatmapGrid, MonthMarker};
pub use loader::{load_snapshot, LoadError, LoadedSnapshot};
