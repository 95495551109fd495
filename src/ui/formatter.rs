//! Pure formatting functions for UI output.
//!
//! Banners and multi-line summaries are built by `format_*` functions and
//! printed by the matching `display_*` function. Single-line status, success,
//! warning and error messages print directly.

use console::style;

use crate::workflow::pr::PullRequest;
use crate::workflow::release::ReleaseOutcome;

pub fn format_banner(version: &str) -> String {
    format!(
        "{} {}\n",
        style("Release Tool").cyan().bold(),
        style(format!("v{}", version)).cyan()
    )
}

/// Print the start-up banner.
pub fn display_banner(version: &str) {
    println!("{}", format_banner(version));
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a warning in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn format_release_summary(outcome: &ReleaseOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "Created {} at version {}",
        outcome.branch, outcome.version
    )];
    match outcome.merged {
        Some(trunk) => lines.push(format!("Merged {} into {}", trunk, outcome.branch)),
        None => lines.push("No main/master branch to merge".to_string()),
    }
    if outcome.components > 0 {
        lines.push(format!(
            "Bumped {} component manifest(s)",
            outcome.components
        ));
    }
    lines.push(format!("Committed v{}", outcome.version));
    lines
}

/// Summarize a finished release branch workflow.
pub fn display_release_summary(outcome: &ReleaseOutcome) {
    println!("\n{}", style("Release branch ready:").bold());
    for line in format_release_summary(outcome) {
        display_success(&line);
    }
}

pub fn format_pull_requests(requests: &[PullRequest]) -> Vec<String> {
    requests
        .iter()
        .map(|request| format!("{} → {}", request.title, request.base))
        .collect()
}

/// Summarize the pull requests that were opened.
pub fn display_pull_requests(requests: &[PullRequest]) {
    if requests.is_empty() {
        display_warning("No trunk branches found; no pull requests were opened");
        return;
    }
    println!("\n{}", style("Pull requests opened:").bold());
    for line in format_pull_requests(requests) {
        display_success(&line);
    }
}
