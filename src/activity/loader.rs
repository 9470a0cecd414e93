//! Loading a snapshot for a specific user.

use chrono::{DateTime, Utc};

use crate::contribution::username::same_user;
use crate::contribution::{
    extract_username, normalize_rows, take_trailing, ContributionDay, SnapshotDocument,
};
use crate::ports::snapshot_source::{SnapshotSource, SourceError};

/// Why a snapshot could not be used. Each variant maps to its own status line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// No snapshot has been generated (or the server refused it).
    #[error("Snapshot unavailable: {0}")]
    Unavailable(String),

    /// The snapshot was generated for someone else.
    #[error("Snapshot belongs to @{found}, expected @{expected}")]
    UsernameMismatch {
        /// Username the caller asked for.
        expected: String,
        /// Username recorded in the snapshot.
        found: String,
    },

    /// The source could not be reached.
    #[error("Snapshot fetch failed: {0}")]
    Network(String),

    /// The body was not a snapshot document.
    #[error("Malformed snapshot: {0}")]
    Malformed(String),
}

impl From<SourceError> for LoadError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable(detail) => Self::Unavailable(detail),
            SourceError::Network(detail) => Self::Network(detail),
        }
    }
}

/// A snapshot that passed the identity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSnapshot {
    /// When the snapshot was generated, if recorded.
    pub generated_at: Option<DateTime<Utc>>,
    /// Normalized rows, trimmed to the requested window.
    pub rows: Vec<ContributionDay>,
}

/// Fetches the snapshot from `source` and returns the trailing `days` rows
/// for `username`. A `days` of 0 returns every row.
///
/// Rows are not zero-filled; sparse snapshots come back short.
///
/// # Errors
///
/// Returns [`LoadError::UsernameMismatch`] when the snapshot records a
/// different user, [`LoadError::Malformed`] when the body does not parse,
/// and the source's own category otherwise.
pub async fn load_snapshot(
    source: &dyn SnapshotSource,
    username: &str,
    days: usize,
) -> Result<LoadedSnapshot, LoadError> {
    let body = source.fetch().await?;
    let document =
        SnapshotDocument::parse(&body).map_err(|e| LoadError::Malformed(e.to_string()))?;

    if let Some(found) = extract_username(document.username.as_deref()) {
        if !same_user(&found, username) {
            return Err(LoadError::UsernameMismatch { expected: username.to_string(), found });
        }
    }

    let rows = take_trailing(normalize_rows(&document.contributions), days);
    log::debug!("loaded {} rows for @{username} from {}", rows.len(), source.describe());

    Ok(LoadedSnapshot { generated_at: document.generated_at(), rows })
}
