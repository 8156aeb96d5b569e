//! User interface module - release progress panels.
//!
//! - `formatter` - single-line status, success, warning and error messages
//! - This module - multi-line panels for the version change and the result

use console::style;

use crate::cli::orchestration::BumpOutcome;
use crate::domain::{BumpRequest, VersionString};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success, display_warning,
};

/// Announce the request about to be handed to the version manager.
pub fn display_request(program: &str, current: &VersionString, request: &BumpRequest) {
    println!(
        "\n{} {} (current: {})",
        style("Bumping with").bold(),
        request,
        style(current).cyan()
    );
    println!("  via {}", style(program).dim());
}

/// Display the version change that will be committed.
pub fn display_version_change(old: &VersionString, new: &VersionString) {
    println!("\n{}", style("Version Change:").bold());
    println!("  From: {}", style(old).red());
    println!("  To:   {}", style(new).green());
}

/// Display the final release summary.
pub fn display_summary(outcome: &BumpOutcome) {
    println!(
        "\n{} Released {} ({} -> {})",
        style("✓").green(),
        style(&outcome.tag).bold(),
        outcome.old_version,
        outcome.new_version
    );
    if let Some(branch) = &outcome.branch {
        println!("  Branch {} and tag pushed to {}", branch, outcome.remote);
    }
}
