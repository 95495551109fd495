//! Domain logic - pure release rules independent of git and the filesystem

pub mod branch;
pub mod changelog;
pub mod remote;
pub mod version;

pub use branch::{BranchKind, TrunkBranch};
pub use remote::RepositoryIdentity;
pub use version::{bump, BumpKind};
