use crate::error::{ReleaseError, Result};

/// Marker line under which unreleased changes are collected
pub const UNRELEASED_MARKER: &str = "## [Unreleased]";

/// Subsections every new release entry starts with, in order
pub const SECTIONS: [&str; 5] = ["Added", "Changed", "Deprecated", "Fixed", "Removed"];

/// Inserts a release entry at the `## [Unreleased]` marker.
///
/// The versioned header takes the marker's place and a fresh marker with empty
/// subsections goes directly above it, so whatever was listed as unreleased now
/// belongs to the new version. The marker line must appear exactly once;
/// otherwise the document is left alone and an error is returned.
///
/// # Arguments
/// * `document` - Current changelog text
/// * `version` - Version text without the `v` prefix
/// * `notes_url` - Release notes link for the version header
/// * `date` - Release date, `YYYY-MM-DD`
pub fn insert_release(document: &str, version: &str, notes_url: &str, date: &str) -> Result<String> {
    let markers = document
        .lines()
        .filter(|line| line.trim_end() == UNRELEASED_MARKER)
        .count();

    match markers {
        0 => {
            return Err(ReleaseError::changelog(format!(
                "marker line '{}' not found",
                UNRELEASED_MARKER
            )))
        }
        1 => {}
        n => {
            return Err(ReleaseError::changelog(format!(
                "marker line '{}' appears {} times, expected once",
                UNRELEASED_MARKER, n
            )))
        }
    }

    let entry = release_entry(version, notes_url, date);
    let mut output = String::with_capacity(document.len() + entry.len());
    for line in document.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if content.trim_end() == UNRELEASED_MARKER {
            output.push_str(&entry);
            output.push_str(&line[content.len()..]);
        } else {
            output.push_str(line);
        }
    }

    Ok(output)
}

fn release_entry(version: &str, notes_url: &str, date: &str) -> String {
    let mut entry = String::from(UNRELEASED_MARKER);
    entry.push_str("\n\n");
    for section in SECTIONS {
        entry.push_str("### ");
        entry.push_str(section);
        entry.push_str("\n\n");
    }
    entry.push_str(&format!("## [v{}]({}) - {}", version, notes_url, date));
    entry
}
