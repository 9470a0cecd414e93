//! Command dispatch and handlers.

pub mod placeholder;
pub mod show;
pub mod sync;
pub mod username;

use crate::cli::Command;
use show::SnapshotLocation;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Sync { output } => sync::run(output).await,
        Command::Show { snapshot, url, github, profile, days } => {
            let location = snapshot
                .as_deref()
                .map(SnapshotLocation::File)
                .or_else(|| url.as_deref().map(SnapshotLocation::Url));
            show::run(location, github.as_deref(), profile.as_deref(), *days).await
        }
        Command::Username { input } => username::run(input),
        Command::Placeholder { days } => placeholder::run(*days),
    }
}
