//! `heatgrid placeholder` command.

use crate::context::ServiceContext;
use crate::contribution::{ContributionDay, Window};

/// Execute the `placeholder` command: print the all-zero window as JSON.
///
/// # Errors
///
/// Returns an error string if serialization fails.
pub fn run(days: u32) -> Result<(), String> {
    let rows = placeholder(&ServiceContext::live(), days);
    let text = serde_json::to_string_pretty(&rows)
        .map_err(|e| format!("Failed to serialize placeholder: {e}"))?;
    println!("{text}");
    Ok(())
}

/// The placeholder sequence for the window ending today.
#[must_use]
pub fn placeholder(ctx: &ServiceContext, days: u32) -> Vec<ContributionDay> {
    Window::ending_at(ctx.clock.now().date_naive(), days).placeholder()
}
