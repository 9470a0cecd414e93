//! `heatgrid show` command.

use std::path::Path;

use crate::activity::{ActivityCard, CardState, HeatmapGrid};
use crate::adapters::live::snapshot::{FileSnapshotSource, HttpSnapshotSource};
use crate::config::USERNAME_VAR;
use crate::context::ServiceContext;
use crate::ports::filesystem::FileSystem;
use crate::ports::snapshot_source::SnapshotSource;
use crate::profile::Profile;

/// Where to read the snapshot from.
#[derive(Debug, Clone, Copy)]
pub enum SnapshotLocation<'a> {
    /// A local file.
    File(&'a Path),
    /// An HTTP(S) URL.
    Url(&'a str),
}

/// Execute the `show` command.
///
/// The handle comes from `github`, else the profile document at
/// `profile_path`, else `GITHUB_USERNAME`. The card falls back to a
/// placeholder on load failures, so those still print a grid and succeed.
///
/// # Errors
///
/// Returns an error string if no snapshot location was given or the profile
/// document cannot be read.
pub async fn run(
    location: Option<SnapshotLocation<'_>>,
    github: Option<&str>,
    profile_path: Option<&Path>,
    days: u32,
) -> Result<(), String> {
    let location = location.ok_or("Either --snapshot or --url is required")?;
    let ctx = ServiceContext::live();
    let from_profile = match profile_path {
        Some(path) => load_profile(ctx.fs.as_ref(), path)?.github_username(),
        None => None,
    };
    let fallback = std::env::var(USERNAME_VAR).ok();
    let profile = github.or(from_profile.as_deref()).or(fallback.as_deref());

    let state = match location {
        SnapshotLocation::File(path) => {
            let source = FileSnapshotSource::new(ctx.fs.as_ref(), path);
            run_with_source(&ctx, &source, profile, days).await
        }
        SnapshotLocation::Url(url) => {
            let source = HttpSnapshotSource::new(url).map_err(|e| e.to_string())?;
            run_with_source(&ctx, &source, profile, days).await
        }
    };
    println!("{}", render(&state));
    Ok(())
}

/// Reads a profile document.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or is not a profile object.
pub fn load_profile(fs: &dyn FileSystem, path: &Path) -> Result<Profile, String> {
    let text = fs
        .read_to_string(path)
        .map_err(|e| format!("Failed to read profile {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid profile {}: {e}", path.display()))
}

/// Runs one card refresh against `source` and returns the resulting state.
pub async fn run_with_source(
    ctx: &ServiceContext,
    source: &dyn SnapshotSource,
    profile: Option<&str>,
    days: u32,
) -> CardState {
    let today = ctx.clock.now().date_naive();
    let card = ActivityCard::new(days, today);
    card.refresh(source, profile, today).await;
    card.state()
}

/// Formats the card: status line, optional last-updated line, then the grid.
#[must_use]
pub fn render(state: &CardState) -> String {
    let mut out = state.status.to_string();
    let updated = state.last_updated_text();
    if !updated.is_empty() {
        out.push_str("\nUpdated ");
        out.push_str(&updated);
    }
    out.push('\n');
    out.push_str(&HeatmapGrid::new(&state.days).render());
    out
}
