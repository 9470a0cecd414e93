//! `heatgrid username` command.

use crate::contribution::extract_username;

/// Execute the `username` command: print the bare handle for `input`.
///
/// # Errors
///
/// Returns an error string if no username can be extracted.
pub fn run(input: &str) -> Result<(), String> {
    let username =
        extract_username(Some(input)).ok_or_else(|| format!("No GitHub username in {input:?}"))?;
    println!("{username}");
    Ok(())
}
