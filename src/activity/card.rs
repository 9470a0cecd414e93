//! The contribution heatmap card.
//!
//! The card always has something to draw: until a snapshot loads, and after
//! any failure, it shows an all-zero placeholder for its window. Each refresh
//! takes a generation ticket and only the newest ticket may update the card,
//! so a slow response for an old profile never overwrites a newer one.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};

use super::loader::{load_snapshot, LoadError};
use crate::contribution::{extract_username, ContributionDay, Window};
use crate::ports::snapshot_source::SnapshotSource;

/// Status line shown under the heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityStatus {
    /// A load is in flight.
    Loading,
    /// The profile has no usable GitHub handle.
    NotConfigured,
    /// Rows were loaded for the user.
    Synced(String),
    /// The snapshot loaded but holds no rows.
    NoActivity(String),
    /// No snapshot exists yet.
    SyncRequired,
    /// The snapshot belongs to another user.
    UsernameMismatch,
    /// The snapshot could not be fetched.
    FetchFailed,
    /// Anything else went wrong.
    Unavailable(String),
}

impl ActivityStatus {
    /// Status for a failed load of `username`'s snapshot.
    #[must_use]
    pub fn for_error(err: &LoadError, username: &str) -> Self {
        match err {
            LoadError::Unavailable(_) => Self::SyncRequired,
            LoadError::UsernameMismatch { .. } => Self::UsernameMismatch,
            LoadError::Network(_) => Self::FetchFailed,
            LoadError::Malformed(_) => Self::Unavailable(username.to_string()),
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading..."),
            Self::NotConfigured => f.write_str("GitHub not configured"),
            Self::Synced(user) => write!(f, "Synced • @{user}"),
            Self::NoActivity(user) => write!(f, "No synced activity • @{user}"),
            Self::SyncRequired => f.write_str("Run contribution sync"),
            Self::UsernameMismatch => f.write_str("Snapshot username mismatch"),
            Self::FetchFailed => f.write_str("Snapshot fetch failed"),
            Self::Unavailable(user) => write!(f, "Unable to load • @{user}"),
        }
    }
}

/// Everything the card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    /// Cells to draw, ascending by date.
    pub days: Vec<ContributionDay>,
    /// Status line.
    pub status: ActivityStatus,
    /// Snapshot generation time, when known.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CardState {
    /// `last_updated` as `Mon D, YYYY`, or an empty string.
    #[must_use]
    pub fn last_updated_text(&self) -> String {
        self.last_updated.map(|at| at.format("%b %-d, %Y").to_string()).unwrap_or_default()
    }
}

/// Identifies one refresh of an [`ActivityCard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Heatmap card state machine.
pub struct ActivityCard {
    window_days: u32,
    generation: AtomicU64,
    state: Mutex<CardState>,
}

impl ActivityCard {
    /// Creates a card in the loading state showing the placeholder window.
    #[must_use]
    pub fn new(window_days: u32, today: NaiveDate) -> Self {
        let window = Window::ending_at(today, window_days);
        Self {
            window_days: window.len(),
            generation: AtomicU64::new(0),
            state: Mutex::new(CardState {
                days: window.placeholder(),
                status: ActivityStatus::Loading,
                last_updated: None,
            }),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> CardState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Starts a refresh; any earlier ticket becomes stale.
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Applies `next` if `ticket` is still the newest. Returns whether it was applied.
    pub fn finish_load(&self, ticket: LoadTicket, next: CardState) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != ticket.0 {
            log::debug!("discarding stale activity load #{}", ticket.0);
            return false;
        }
        *state = next;
        true
    }

    /// Reloads the card for `profile` (a handle or profile URL) from `source`.
    ///
    /// Returns `false` when a newer refresh started before this one finished.
    pub async fn refresh(
        &self,
        source: &dyn SnapshotSource,
        profile: Option<&str>,
        today: NaiveDate,
    ) -> bool {
        let ticket = self.begin_load();
        let placeholder = Window::ending_at(today, self.window_days).placeholder();

        let Some(username) = extract_username(profile) else {
            let next = CardState {
                days: placeholder,
                status: ActivityStatus::NotConfigured,
                last_updated: None,
            };
            return self.finish_load(ticket, next);
        };

        let days = usize::try_from(self.window_days).unwrap_or(usize::MAX);
        let next = match load_snapshot(source, &username, days).await {
            Ok(loaded) if !loaded.rows.is_empty() => CardState {
                days: loaded.rows,
                status: ActivityStatus::Synced(username),
                last_updated: loaded.generated_at,
            },
            Ok(loaded) => CardState {
                days: placeholder,
                status: ActivityStatus::NoActivity(username),
                last_updated: loaded.generated_at,
            },
            Err(err) => {
                log::warn!("GitHub activity load failed: {err}");
                CardState {
                    days: placeholder,
                    status: ActivityStatus::for_error(&err, &username),
                    last_updated: None,
                }
            }
        };
        self.finish_load(ticket, next)
    }
}
