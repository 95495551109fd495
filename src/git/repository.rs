use crate::domain::{RepositoryIdentity, TrunkBranch};
use crate::error::{ReleaseError, Result};
use crate::process::CommandRunner;

/// `git` command-line wrapper for one checkout
///
/// Read-only queries capture output; mutating commands inherit the terminal
/// so fetch/pull/merge progress stays visible.
pub struct Git<'r, R: CommandRunner + ?Sized> {
    runner: &'r R,
    remote: String,
    organization: Option<String>,
}

impl<'r, R: CommandRunner + ?Sized> Git<'r, R> {
    pub fn new(runner: &'r R, remote: impl Into<String>) -> Self {
        Git {
            runner,
            remote: remote.into(),
            organization: None,
        }
    }

    /// Require the remote to belong to `organization`
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Lists all local and remote-tracking branches.
    ///
    /// Selection markers (`*` current, `+` other worktree) and leading
    /// whitespace are stripped.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Branch entries in `git branch -a` order
    /// * `Err` - [ReleaseError::Vcs] if git printed nothing
    pub fn list_branches(&self) -> Result<Vec<String>> {
        let output = self.runner.output("git", &["branch", "-a"])?;
        if output.trim().is_empty() {
            return Err(ReleaseError::vcs("Could not get all branches."));
        }

        Ok(output
            .lines()
            .map(|line| {
                let line = line.trim_start();
                line.strip_prefix(['*', '+'])
                    .unwrap_or(line)
                    .trim()
                    .to_string()
            })
            .filter(|line| !line.is_empty())
            .collect())
    }

    /// Lists the trunk branches that exist on the remote.
    ///
    /// Any subset of `develop`, `main` and `master` may exist; an empty list is
    /// a valid answer.
    pub fn list_trunk_branches(&self) -> Result<Vec<TrunkBranch>> {
        let mut trunks = Vec::new();
        for entry in self.list_branches()? {
            if let Some(trunk) = TrunkBranch::from_remote_ref(&entry, &self.remote) {
                if !trunks.contains(&trunk) {
                    trunks.push(trunk);
                }
            }
        }
        log::debug!("trunk branches on {}: {:?}", self.remote, trunks);
        Ok(trunks)
    }

    pub fn current_branch(&self) -> Result<String> {
        let branch = self.runner.output("git", &["branch", "--show-current"])?;
        let branch = branch.trim();
        if branch.is_empty() {
            return Err(ReleaseError::vcs("Could not get current branch."));
        }
        Ok(branch.to_string())
    }

    /// Host, owner and name of the repository, from the remote's URL
    pub fn repository_identity(&self) -> Result<RepositoryIdentity> {
        let key = format!("remote.{}.url", self.remote);
        let url = self.runner.output("git", &["config", "--get", &key])?;
        RepositoryIdentity::parse(&url, self.organization.as_deref())
    }

    pub fn repository_name(&self) -> Result<String> {
        Ok(self.repository_identity()?.name)
    }

    pub fn fetch(&self, branch: &str) -> Result<()> {
        self.runner.run("git", &["fetch", &self.remote, branch])
    }

    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.runner.run("git", &["checkout", branch])
    }

    pub fn pull(&self) -> Result<()> {
        self.runner.run("git", &["pull"])
    }

    /// Create `branch` from the current HEAD and switch to it
    pub fn create_branch(&self, branch: &str) -> Result<()> {
        self.runner.run("git", &["checkout", "-b", branch])
    }

    pub fn merge(&self, branch: &str) -> Result<()> {
        self.runner.run("git", &["merge", branch])
    }

    pub fn add(&self, paths: &[&str]) -> Result<()> {
        let mut args = vec!["add"];
        args.extend_from_slice(paths);
        self.runner.run("git", &args)
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.runner.run("git", &["commit", "-m", message])
    }
}
