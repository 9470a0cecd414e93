//! `heatgrid sync` command.

use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};

use crate::adapters::live::github::LiveGitHubCalendar;
use crate::config::{ConfigError, SyncConfig};
use crate::context::ServiceContext;
use crate::contribution::{fill_window, Snapshot, Window};
use crate::ports::calendar::{CalendarError, CalendarQuery, ContributionCalendar};

/// Where the site expects the snapshot.
pub const DEFAULT_OUTPUT: &str = "frontend/public/github-contributions.json";

/// Everything that can abort a sync.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Missing configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The calendar API failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// The snapshot could not be rendered.
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The snapshot could not be written.
    #[error("Failed to write {path}: {message}")]
    Write {
        /// Output path.
        path: String,
        /// Underlying error.
        message: String,
    },
}

/// Execute the `sync` command against the live GitHub API.
///
/// # Errors
///
/// Returns an error string if configuration is missing, the API call fails,
/// or the snapshot cannot be written.
pub async fn run(output: &Path) -> Result<(), String> {
    let config = SyncConfig::from_env().map_err(|e| e.to_string())?;
    let calendar =
        LiveGitHubCalendar::new(&config.token, &config.endpoint).map_err(|e| e.to_string())?;
    let ctx = ServiceContext::live();

    let snapshot =
        run_with_context(&ctx, &calendar, &config, output).await.map_err(|e| e.to_string())?;
    println!("Wrote {} contributions to {}", snapshot.contributions.len(), output.display());
    Ok(())
}

/// Fetches the trailing window for `config.username` and writes the snapshot to `output`.
///
/// # Errors
///
/// Returns a [`SyncError`] for API, serialization, or write failures.
pub async fn run_with_context(
    ctx: &ServiceContext,
    calendar: &dyn ContributionCalendar,
    config: &SyncConfig,
    output: &Path,
) -> Result<Snapshot, SyncError> {
    let now = ctx.clock.now();
    let window = Window::ending_at(now.date_naive(), config.days);
    let query = CalendarQuery {
        login: config.username.clone(),
        from: range_start(now, window.len()),
        to: now,
    };

    log::info!(
        "Fetching {} days of contributions for {} ({} to {})",
        window.len(),
        query.login,
        window.start(),
        window.end()
    );
    let rows = calendar.fetch_days(&query).await?;
    log::debug!("calendar returned {} rows", rows.len());

    let snapshot = Snapshot {
        username: config.username.clone(),
        generated_at: now,
        days: window.len(),
        contributions: fill_window(&rows, &window),
    };

    let text = snapshot.to_pretty_json()?;
    ctx.fs.write(output, &text).map_err(|e| SyncError::Write {
        path: output.display().to_string(),
        message: e.to_string(),
    })?;
    log::info!("Snapshot written to {}", output.display());
    Ok(snapshot)
}

fn range_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    TimeDelta::try_days(i64::from(days) - 1)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
