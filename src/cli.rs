//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::sync::DEFAULT_OUTPUT;
use crate::contribution::{DEFAULT_DAYS, MAX_DAYS};

/// Top-level CLI parser for `heatgrid`.
#[derive(Debug, Parser)]
#[command(name = "heatgrid", version, about = "Snapshot and render GitHub contribution heatmaps")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the contribution calendar and write the snapshot file.
    ///
    /// Reads GITHUB_GRAPHQL_TOKEN, GITHUB_USERNAME, and optionally
    /// GITHUB_CONTRIBUTION_DAYS and GITHUB_GRAPHQL_URL.
    Sync {
        /// Snapshot output path.
        #[arg(long, short, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Load a snapshot and print the heatmap card.
    Show {
        /// Snapshot file to read.
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        snapshot: Option<PathBuf>,
        /// Snapshot URL to fetch.
        #[arg(long)]
        url: Option<String>,
        /// GitHub handle or profile URL (defaults to the profile's, then GITHUB_USERNAME).
        #[arg(long)]
        github: Option<String>,
        /// Profile JSON document whose `github` field names the account.
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Window length in days.
        #[arg(
            long,
            default_value_t = DEFAULT_DAYS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DAYS))
        )]
        days: u32,
    },
    /// Print the bare username for a handle or profile URL.
    Username {
        /// Handle (`octocat`, `@octocat`) or profile URL.
        input: String,
    },
    /// Print an all-zero contribution window as JSON.
    Placeholder {
        /// Window length in days.
        #[arg(
            long,
            default_value_t = DEFAULT_DAYS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DAYS))
        )]
        days: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_sync_with_default_output() {
        let cli = Cli::parse_from(["heatgrid", "sync"]);
        match cli.command {
            Command::Sync { output } => {
                assert_eq!(output.to_str(), Some("frontend/public/github-contributions.json"));
            }
            other => panic!("expected sync, got {other:?}"),
        }
    }

    #[test]
    fn parses_show_with_snapshot() {
        let cli = Cli::parse_from(["heatgrid", "show", "--snapshot", "s.json", "--github", "octocat"]);
        match cli.command {
            Command::Show { snapshot, url, github, profile, days } => {
                assert_eq!(snapshot.unwrap().to_str(), Some("s.json"));
                assert!(url.is_none());
                assert!(profile.is_none());
                assert_eq!(github.as_deref(), Some("octocat"));
                assert_eq!(days, 364);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn show_requires_a_source() {
        assert!(Cli::try_parse_from(["heatgrid", "show"]).is_err());
    }

    #[test]
    fn show_rejects_both_sources() {
        let result =
            Cli::try_parse_from(["heatgrid", "show", "--snapshot", "a.json", "--url", "http://x"]);
        assert!(result.is_err());
    }

    #[test]
    fn placeholder_rejects_zero_days() {
        assert!(Cli::try_parse_from(["heatgrid", "placeholder", "--days", "0"]).is_err());
        let cli = Cli::parse_from(["heatgrid", "placeholder", "--days", "7"]);
        assert!(matches!(cli.command, Command::Placeholder { days: 7 }));
    }

    #[test]
    fn days_are_bounded_above() {
        let cli = Cli::parse_from(["heatgrid", "placeholder", "--days", "3660"]);
        assert!(matches!(cli.command, Command::Placeholder { days: 3660 }));
        assert!(Cli::try_parse_from(["heatgrid", "placeholder", "--days", "3661"]).is_err());
        assert!(Cli::try_parse_from(["heatgrid", "show", "--snapshot", "s.json", "--days", "4000000000"])
            .is_err());
    }
}
