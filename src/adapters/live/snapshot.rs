//! Live adapters for the `SnapshotSource` port.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use reqwest::Client;

use super::github::REQUEST_TIMEOUT;
use crate::ports::filesystem::FileSystem;
use crate::ports::snapshot_source::{SnapshotSource, SourceError, SourceFuture};

/// Reads the snapshot from a file through the filesystem port.
pub struct FileSnapshotSource<'a> {
    fs: &'a dyn FileSystem,
    path: PathBuf,
}

impl<'a> FileSnapshotSource<'a> {
    /// Creates a source for the snapshot at `path`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, path: &Path) -> Self {
        Self { fs, path: path.to_path_buf() }
    }
}

impl SnapshotSource for FileSnapshotSource<'_> {
    fn fetch(&self) -> SourceFuture<'_> {
        Box::pin(async move {
            if !self.fs.exists(&self.path) {
                return Err(SourceError::Unavailable(format!(
                    "{} does not exist",
                    self.path.display()
                )));
            }
            self.fs
                .read_to_string(&self.path)
                .map_err(|e| SourceError::Network(format!("{}: {e}", self.path.display())))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the snapshot over HTTP, bypassing intermediate caches.
pub struct HttpSnapshotSource {
    client: Client,
    url: String,
}

impl HttpSnapshotSource {
    /// Creates a source for the snapshot served at `url`, giving up after 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Network`] if the HTTP client cannot be built.
    pub fn new(url: &str) -> Result<Self, SourceError> {
        Self::with_timeout(url, REQUEST_TIMEOUT)
    }

    /// Like [`HttpSnapshotSource::new`] with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Network`] if the HTTP client cannot be built.
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;
        Ok(Self { client, url: url.to_string() })
    }
}

impl SnapshotSource for HttpSnapshotSource {
    fn fetch(&self) -> SourceFuture<'_> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.url)
                .header(CACHE_CONTROL, "no-store")
                .send()
                .await
                .map_err(|e| SourceError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SourceError::Unavailable(format!("HTTP {}", status.as_u16())));
            }
            response.text().await.map_err(|e| SourceError::Network(e.to_string()))
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LiveFileSystem;
        let source = FileSnapshotSource::new(&fs, &dir.path().join("github-contributions.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{\"username\":\"octocat\"}").unwrap();
        let fs = LiveFileSystem;
        let source = FileSnapshotSource::new(&fs, &path);
        assert_eq!(source.fetch().await.unwrap(), "{\"username\":\"octocat\"}");
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let source =
            HttpSnapshotSource::new("http://127.0.0.1:9/github-contributions.json").unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
    }

    #[tokio::test]
    async fn stalled_server_times_out() {
        // Connections queue in the backlog but nothing ever answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/github-contributions.json", listener.local_addr().unwrap());
        let source = HttpSnapshotSource::with_timeout(&url, Duration::from_millis(200)).unwrap();

        let started = std::time::Instant::now();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, SourceError::Network(_)));
        assert!(started.elapsed() < Duration::from_secs(5));
        drop(listener);
    }
}
