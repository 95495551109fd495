//! Git operations over the `git` command line
//!
//! [Git] wraps a [CommandRunner](crate::process::CommandRunner) and exposes the
//! branch queries the workflows inspect (all branches, trunk branches, current
//! branch, repository identity) plus the handful of mutating commands the
//! release branch workflow issues.
//!
//! ```rust
//! # use release_tool::git::Git;
//! # use release_tool::process::MockRunner;
//! let runner = MockRunner::new().with_output("git branch -a", "* main\n  remotes/origin/main");
//! let git = Git::new(&runner, "origin");
//! let trunks = git.list_trunk_branches().unwrap();
//! assert_eq!(trunks.len(), 1);
//! ```

pub mod repository;

pub use repository::Git;
