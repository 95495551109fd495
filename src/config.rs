use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the repository and user config dir
pub const CONFIG_FILE_NAME: &str = "release-tool.toml";

/// Environment variable holding comma-separated default PR reviewers
pub const DEFAULT_REVIEWER_ENV: &str = "DEFAULT_PR_REVIEWER";

/// Represents the complete configuration for release-tool.
///
/// Contains the repository layout the release workflow edits and the pull
/// request defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub pull_request: PullRequestConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

fn default_components_dir() -> String {
    "drivers".to_string()
}

fn default_component_manifest() -> String {
    "attributes.json".to_string()
}

/// Where the release files live and which remote is authoritative.
///
/// All paths are relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Owner the remote URL must belong to, if any
    #[serde(default)]
    pub organization: Option<String>,

    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_changelog")]
    pub changelog: String,

    #[serde(default = "default_components_dir")]
    pub components_dir: String,

    #[serde(default = "default_component_manifest")]
    pub component_manifest: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            remote: default_remote(),
            organization: None,
            manifest: default_manifest(),
            changelog: default_changelog(),
            components_dir: default_components_dir(),
            component_manifest: default_component_manifest(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PullRequestConfig {
    #[serde(default)]
    pub default_reviewers: Vec<String>,
}

impl Config {
    /// Apply environment overrides through `lookup`.
    ///
    /// `DEFAULT_PR_REVIEWER` replaces the configured reviewers when it holds at
    /// least one non-empty, comma-separated name.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(DEFAULT_REVIEWER_ENV) {
            let reviewers = split_reviewers(&raw);
            if !reviewers.is_empty() {
                self.pull_request.default_reviewers = reviewers;
            }
        }
        self
    }
}

/// Split a comma-separated reviewer list, dropping blanks
pub fn split_reviewers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-tool.toml` in the repository root
/// 3. `release-tool.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(root),
    };

    let Some(path) = path else {
        log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let content = fs::read_to_string(&path)
        .map_err(|e| ReleaseError::config(format!("cannot read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| ReleaseError::config(format!("invalid {}: {}", path.display(), e)))
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    let local = root.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Load `.env` from the repository root into the process environment, if present.
///
/// A `.env` that fails to parse is reported and skipped; variables on lines
/// before the bad one may already be set.
pub fn load_env_file(root: &Path) {
    let path = root.join(".env");
    if !path.is_file() {
        return;
    }
    match dotenvy::from_path(&path) {
        Ok(()) => log::info!("Loaded environment variables from {}", path.display()),
        Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.repository.remote, "origin");
        assert_eq!(config.repository.manifest, "package.json");
        assert_eq!(config.repository.changelog, "CHANGELOG.md");
        assert_eq!(config.repository.components_dir, "drivers");
        assert_eq!(config.repository.component_manifest, "attributes.json");
        assert_eq!(config.repository.organization, None);
        assert!(config.pull_request.default_reviewers.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[repository]
organization = "labforward"
"#,
        )
        .unwrap();
        assert_eq!(config.repository.organization.as_deref(), Some("labforward"));
        assert_eq!(config.repository.remote, "origin");
        assert_eq!(config.repository.manifest, "package.json");
    }

    #[test]
    fn test_split_reviewers() {
        assert_eq!(split_reviewers("alice, bob,,carol "), vec!["alice", "bob", "carol"]);
        assert!(split_reviewers(" , ").is_empty());
    }

    #[test]
    fn test_env_overrides_file_reviewers() {
        let mut config = Config::default();
        config.pull_request.default_reviewers = vec!["dave".to_string()];

        let config = config.with_env(|key| {
            (key == DEFAULT_REVIEWER_ENV).then(|| "alice,bob".to_string())
        });
        assert_eq!(config.pull_request.default_reviewers, vec!["alice", "bob"]);
    }

    #[test]
    fn test_blank_env_keeps_file_reviewers() {
        let mut config = Config::default();
        config.pull_request.default_reviewers = vec!["dave".to_string()];

        let config = config.with_env(|_| Some("  ".to_string()));
        assert_eq!(config.pull_request.default_reviewers, vec!["dave"]);

        let config = config.with_env(|_| None);
        assert_eq!(config.pull_request.default_reviewers, vec!["dave"]);
    }
}
