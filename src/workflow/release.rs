//! Release branch workflow
//!
//! Runs, in order:
//! 1. Sync every trunk branch (fetch, checkout, pull)
//! 2. Bump the manifest version and any component manifests
//! 3. Insert the release entry into the changelog
//! 4. Create `release/v<version>` from the last synced trunk
//! 5. Merge `main`/`master` into it when one exists
//! 6. Stage the edited files and commit `v<version>`
//!
//! A failure during sync leaves the files untouched. Once step 2 starts
//! writing, a failure leaves the tree as it is; nothing is rolled back and
//! the operator recovers by hand.

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use semver::Version;

use crate::config::RepositoryConfig;
use crate::domain::branch::release_branch_name;
use crate::domain::{bump, changelog, BranchKind, BumpKind, TrunkBranch};
use crate::error::{ReleaseError, Result};
use crate::git::Git;
use crate::manifest;
use crate::process::CommandRunner;
use crate::ui;
use crate::workflow::ProjectFiles;

/// Result of a successful release branch workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    pub version: Version,
    pub branch: String,
    /// Production branch merged into the release branch, if any
    pub merged: Option<TrunkBranch>,
    /// Number of component manifests bumped alongside the main manifest
    pub components: usize,
}

pub struct ReleaseWorkflow<'r, R: CommandRunner + ?Sized> {
    git: Git<'r, R>,
    files: ProjectFiles,
    today: NaiveDate,
}

impl<'r, R: CommandRunner + ?Sized> ReleaseWorkflow<'r, R> {
    pub fn new(runner: &'r R, repository: &RepositoryConfig, root: impl Into<PathBuf>) -> Self {
        ReleaseWorkflow {
            git: Git::new(runner, repository.remote.clone())
                .with_organization(repository.organization.clone()),
            files: ProjectFiles::new(root, repository),
            today: Utc::now().date_naive(),
        }
    }

    /// Override the changelog date (UTC today by default)
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn run(&self, kind: BumpKind) -> Result<ReleaseOutcome> {
        let trunks = self.git.list_trunk_branches()?;
        if trunks.is_empty() {
            return Err(ReleaseError::precondition(format!(
                "no develop, main or master branch found on remote '{}'",
                self.git.remote()
            )));
        }

        self.sync(&trunks)?;

        let current = manifest::read_version(&self.files.manifest_path())?;
        let version = bump(current.as_deref(), kind)?;
        let branch = release_branch_name(&version);
        ui::display_status(&format!(
            "Bumping {} version {} -> {}",
            kind,
            current.as_deref().unwrap_or("(none)"),
            version
        ));

        match self.cut_release(&trunks, &version, &branch) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                ui::display_recovery_notice(&version, &branch);
                Err(e)
            }
        }
    }

    fn sync(&self, trunks: &[TrunkBranch]) -> Result<()> {
        for trunk in trunks {
            ui::display_status(&format!("Syncing {}", trunk));
            self.git.fetch(trunk.as_str())?;
            self.git.checkout(trunk.as_str())?;
            self.git.pull()?;
        }

        let current = self.git.current_branch()?;
        match BranchKind::classify(&current) {
            BranchKind::Trunk(_) => Ok(()),
            _ => Err(ReleaseError::precondition(format!(
                "expected a trunk branch to be checked out after syncing, found '{}'",
                current
            ))),
        }
    }

    fn cut_release(
        &self,
        trunks: &[TrunkBranch],
        version: &Version,
        branch: &str,
    ) -> Result<ReleaseOutcome> {
        manifest::write_version(&self.files.manifest_path(), version)?;
        let components = manifest::bump_components(
            &self.files.components_path(),
            &self.files.component_manifest,
            version,
        )?;

        self.write_changelog(version)?;

        ui::display_status(&format!("Creating {}", branch));
        self.git.create_branch(branch)?;

        let merged = trunks.iter().copied().find(TrunkBranch::is_production);
        if let Some(production) = merged {
            ui::display_status(&format!("Merging {} into {}", production, branch));
            self.git.merge(production.as_str())?;
        }

        let mut paths = vec![self.files.manifest.as_str(), self.files.changelog.as_str()];
        if !components.is_empty() {
            paths.push(self.files.components_dir.as_str());
        }
        self.git.add(&paths)?;
        self.git.commit(&format!("v{}", version))?;

        Ok(ReleaseOutcome {
            version: version.clone(),
            branch: branch.to_string(),
            merged,
            components: components.len(),
        })
    }

    fn write_changelog(&self, version: &Version) -> Result<()> {
        let path = self.files.changelog_path();
        let document = fs::read_to_string(&path).map_err(|e| {
            ReleaseError::changelog(format!("cannot read {}: {}", path.display(), e))
        })?;

        let identity = self.git.repository_identity()?;
        let version = version.to_string();
        let updated = changelog::insert_release(
            &document,
            &version,
            &identity.release_notes_url(&version),
            &self.today.format("%Y-%m-%d").to_string(),
        )?;

        fs::write(&path, updated)?;
        Ok(())
    }
}
