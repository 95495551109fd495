use crate::error::{ReleaseError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;

/// Version assigned when the manifest carries no prior version.
pub const INITIAL_VERSION: Version = Version::new(1, 0, 0);

/// Which semantic-version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
        };
        f.write_str(name)
    }
}

/// Computes the next version from the manifest's current one.
///
/// An absent (or empty) current version bootstraps to `1.0.0` whatever the
/// bump kind. A pre-release of the version being bumped to is finalized
/// instead of skipped over, so `1.3.0-rc.1` bumped by `minor` gives `1.3.0`.
///
/// # Errors
/// Returns [`ReleaseError::InvalidVersion`] when `current` is not semver.
///
/// # Example
/// ```
/// use release_tool::domain::version::{bump, BumpKind};
///
/// assert_eq!(bump(None, BumpKind::Major).unwrap().to_string(), "1.0.0");
/// assert_eq!(bump(Some("1.2.3"), BumpKind::Minor).unwrap().to_string(), "1.3.0");
/// ```
pub fn bump(current: Option<&str>, kind: BumpKind) -> Result<Version> {
    let raw = match current.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(INITIAL_VERSION),
    };

    let mut version = Version::parse(raw)
        .map_err(|e| ReleaseError::invalid_version(format!("'{}': {}", raw, e)))?;

    let finalizing = !version.pre.is_empty();
    match kind {
        BumpKind::Major => {
            if !(finalizing && version.minor == 0 && version.patch == 0) {
                version.major += 1;
            }
            version.minor = 0;
            version.patch = 0;
        }
        BumpKind::Minor => {
            if !(finalizing && version.patch == 0) {
                version.minor += 1;
            }
            version.patch = 0;
        }
        BumpKind::Patch => {
            if !finalizing {
                version.patch += 1;
            }
        }
    }
    version.pre = Prerelease::EMPTY;
    version.build = BuildMetadata::EMPTY;

    Ok(version)
}
