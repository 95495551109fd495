//! User interface module - terminal output for the release commands.
//!
//! The tool never prompts; every step is announced as it starts and the
//! workflows print a summary when they finish.

pub mod formatter;

pub use formatter::{
    display_banner, display_error, display_pull_requests, display_release_summary,
    display_status, display_success, display_warning,
};

/// Prints the manual-recovery notice after a release step failed midway.
///
/// The workflow never rolls back, so the operator gets told what may already
/// have changed.
pub fn display_recovery_notice(version: &semver::Version, branch: &str) {
    display_warning(&format!(
        "Release v{} stopped partway; the working tree may already be modified.",
        version
    ));
    display_warning(&format!(
        "Inspect `git status` and `git branch`, then restore the manifest and changelog or delete {} by hand.",
        branch
    ));
}
