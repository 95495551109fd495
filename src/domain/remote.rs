use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::sync::LazyLock;

static REMOTE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-z][a-z0-9+.-]*://)?(?:[^@/]+@)?(?P<host>[^:/]+)(?::\d+)?[:/](?P<owner>[^/]+)/(?P<name>[^/]+?)(?:\.git)?/?$",
    )
    .expect("remote URL pattern is valid")
});

/// Repository identity parsed from a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RepositoryIdentity {
    /// Parse a remote URL in scp-like (`git@github.com:org/widgets.git`) or
    /// URL form (`https://github.com/org/widgets.git`).
    ///
    /// When `organization` is given, the owner must match it.
    pub fn parse(url: &str, organization: Option<&str>) -> Result<Self> {
        let url = url.trim();
        let captures = REMOTE_URL_RE.captures(url).ok_or_else(|| {
            ReleaseError::vcs(format!("Could not get repository name in \"{}\"", url))
        })?;

        let identity = RepositoryIdentity {
            host: captures["host"].to_string(),
            owner: captures["owner"].to_string(),
            name: captures["name"].to_string(),
        };

        if let Some(org) = organization {
            if identity.owner != org {
                return Err(ReleaseError::vcs(format!(
                    "Remote \"{}\" does not belong to organization '{}'",
                    url, org
                )));
            }
        }

        Ok(identity)
    }

    /// Link to the hosted release notes for a version
    pub fn release_notes_url(&self, version: &str) -> String {
        format!(
            "https://{}/{}/{}/releases/tag/v{}",
            self.host, self.owner, self.name, version
        )
    }
}
