//! Release workflows
//!
//! - [release::ReleaseWorkflow]: sync trunks, bump, write changelog, cut
//!   `release/v<version>` and commit
//! - [pr::PrWorkflow]: open one pull request per trunk branch from the current
//!   release branch
//!
//! Both run every git operation sequentially and stop at the first failure.

pub mod pr;
pub mod release;

use std::path::PathBuf;

use crate::config::RepositoryConfig;

pub use pr::{PrWorkflow, PullRequest};
pub use release::{ReleaseOutcome, ReleaseWorkflow};

/// Release files of one repository checkout
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFiles {
    pub root: PathBuf,
    /// Paths below are relative to `root`
    pub manifest: String,
    pub changelog: String,
    pub components_dir: String,
    pub component_manifest: String,
}

impl ProjectFiles {
    pub fn new(root: impl Into<PathBuf>, repository: &RepositoryConfig) -> Self {
        ProjectFiles {
            root: root.into(),
            manifest: repository.manifest.clone(),
            changelog: repository.changelog.clone(),
            components_dir: repository.components_dir.clone(),
            component_manifest: repository.component_manifest.clone(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.changelog)
    }

    pub fn components_path(&self) -> PathBuf {
        self.root.join(&self.components_dir)
    }
}
