//! Core library entry for the `heatgrid` CLI.
//!
//! Normalizes GitHub contribution calendars into fixed-length heatmap
//! sequences, writes static snapshots of them, and loads those snapshots
//! back for display.

pub mod activity;
pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod contribution;
pub mod ports;
pub mod profile;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version arrive as "errors" that belong on stdout.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command).await
}
