//! Snapshot source port: where the heatmap card reads its snapshot from.

use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`SnapshotSource`] to keep the trait dyn-compatible.
pub type SourceFuture<'a> = Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>>;

/// Why a snapshot body could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source answered but has no snapshot (missing file, non-2xx status).
    #[error("Snapshot unavailable: {0}")]
    Unavailable(String),

    /// The source could not be reached.
    #[error("Snapshot fetch failed: {0}")]
    Network(String),
}

/// Provides the raw text of a snapshot document.
pub trait SnapshotSource: Send + Sync {
    /// Fetches the snapshot body.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] when the source has no snapshot and
    /// [`SourceError::Network`] when it cannot be reached.
    fn fetch(&self) -> SourceFuture<'_>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}
