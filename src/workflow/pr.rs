//! Pull request workflow
//!
//! Opens one pull request per trunk branch from the checked-out release
//! branch. Requests are created one after another, in trunk discovery order,
//! so the `gh` output reads top to bottom.

use std::path::PathBuf;

use crate::config::RepositoryConfig;
use crate::domain::{BranchKind, TrunkBranch};
use crate::error::{ReleaseError, Result};
use crate::git::Git;
use crate::manifest;
use crate::process::CommandRunner;
use crate::ui;
use crate::workflow::ProjectFiles;

/// Program used to open pull requests
pub const PR_TOOL: &str = "gh";

/// A pull request that was opened
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub base: TrunkBranch,
    pub title: String,
    pub body: String,
}

impl PullRequest {
    pub fn for_release(version: &str, base: TrunkBranch) -> Self {
        PullRequest {
            base,
            title: format!("Release v{}", version),
            body: format!("### Release v{}", version),
        }
    }

    /// Arguments for `gh`, each reviewer as its own `--reviewer` pair
    pub fn create_args<'a>(&'a self, reviewers: &'a [String]) -> Vec<&'a str> {
        let mut args = vec![
            "pr",
            "create",
            "--title",
            self.title.as_str(),
            "--body",
            self.body.as_str(),
            "--base",
            self.base.as_str(),
        ];
        for reviewer in reviewers {
            args.push("--reviewer");
            args.push(reviewer.as_str());
        }
        args
    }
}

pub struct PrWorkflow<'r, R: CommandRunner + ?Sized> {
    runner: &'r R,
    git: Git<'r, R>,
    files: ProjectFiles,
    default_reviewers: Vec<String>,
}

impl<'r, R: CommandRunner + ?Sized> PrWorkflow<'r, R> {
    pub fn new(
        runner: &'r R,
        repository: &RepositoryConfig,
        root: impl Into<PathBuf>,
        default_reviewers: Vec<String>,
    ) -> Self {
        PrWorkflow {
            runner,
            git: Git::new(runner, repository.remote.clone()),
            files: ProjectFiles::new(root, repository),
            default_reviewers,
        }
    }

    /// Explicit reviewers win over the configured defaults; one of the two is required
    pub fn resolve_reviewers(&self, explicit: &[String]) -> Result<Vec<String>> {
        if !explicit.is_empty() {
            return Ok(explicit.to_vec());
        }
        if !self.default_reviewers.is_empty() {
            return Ok(self.default_reviewers.clone());
        }
        Err(ReleaseError::precondition(
            "at least one reviewer is required (pass reviewers or set DEFAULT_PR_REVIEWER)",
        ))
    }

    pub fn run(&self, explicit_reviewers: &[String]) -> Result<Vec<PullRequest>> {
        let reviewers = self.resolve_reviewers(explicit_reviewers)?;

        let current = self.git.current_branch()?;
        let branch_version = match BranchKind::classify(&current) {
            BranchKind::Release(version) => version,
            _ => {
                return Err(ReleaseError::precondition(format!(
                    "Command requires a release branch, but '{}' is checked out",
                    current
                )))
            }
        };

        let manifest_path = self.files.manifest_path();
        let version = manifest::read_version(&manifest_path)?.ok_or_else(|| {
            ReleaseError::invalid_version(format!(
                "{} has no version to release",
                manifest_path.display()
            ))
        })?;
        if version != branch_version {
            ui::display_warning(&format!(
                "Branch {} does not match manifest version {}; continuing with the manifest",
                current, version
            ));
        }

        let mut opened = Vec::new();
        for trunk in self.git.list_trunk_branches()? {
            ui::display_status(&format!("Opening pull request into {}", trunk));
            let request = PullRequest::for_release(&version, trunk);
            self.runner.run(PR_TOOL, &request.create_args(&reviewers))?;
            opened.push(request);
        }

        Ok(opened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_repeat_reviewer_flag() {
        let request = PullRequest::for_release("2.0.0", TrunkBranch::Develop);
        let reviewers = vec!["alice".to_string(), "bob".to_string(), "alice".to_string()];
        assert_eq!(
            request.create_args(&reviewers),
            vec![
                "pr",
                "create",
                "--title",
                "Release v2.0.0",
                "--body",
                "### Release v2.0.0",
                "--base",
                "develop",
                "--reviewer",
                "alice",
                "--reviewer",
                "bob",
                "--reviewer",
                "alice",
            ]
        );
    }

    #[test]
    fn test_resolve_reviewers_precedence() {
        let runner = crate::process::MockRunner::new();
        let repository = RepositoryConfig::default();

        let workflow = PrWorkflow::new(&runner, &repository, ".", vec!["dave".into()]);
        assert_eq!(
            workflow.resolve_reviewers(&["alice".to_string()]).unwrap(),
            vec!["alice"]
        );
        assert_eq!(workflow.resolve_reviewers(&[]).unwrap(), vec!["dave"]);

        let workflow = PrWorkflow::new(&runner, &repository, ".", Vec::new());
        assert!(matches!(
            workflow.resolve_reviewers(&[]),
            Err(ReleaseError::Precondition(_))
        ));
        assert!(runner.calls().is_empty());
    }
}
