use std::fmt;

/// Prefix of every release branch name
pub const RELEASE_PREFIX: &str = "release/v";

/// Long-lived integration branches a release is cut from and merged back into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrunkBranch {
    Develop,
    Main,
    Master,
}

impl TrunkBranch {
    /// Look up a trunk branch by its bare name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "develop" => Some(TrunkBranch::Develop),
            "main" => Some(TrunkBranch::Main),
            "master" => Some(TrunkBranch::Master),
            _ => None,
        }
    }

    /// Classify a `git branch -a` entry such as `remotes/origin/main`.
    ///
    /// Only remote-tracking entries of `remote` count, so a local-only
    /// `develop` or the `remotes/origin/HEAD -> origin/main` pointer are ignored.
    pub fn from_remote_ref(entry: &str, remote: &str) -> Option<Self> {
        entry
            .strip_prefix("remotes/")
            .and_then(|rest| rest.strip_prefix(remote))
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(Self::from_name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrunkBranch::Develop => "develop",
            TrunkBranch::Main => "main",
            TrunkBranch::Master => "master",
        }
    }

    /// Production branches are the ones hotfixes land on
    pub fn is_production(&self) -> bool {
        matches!(self, TrunkBranch::Main | TrunkBranch::Master)
    }
}

impl fmt::Display for TrunkBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What role a branch name plays in the release flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchKind {
    Trunk(TrunkBranch),
    /// Release branch, carrying the version text after `release/v`
    Release(String),
    Other,
}

impl BranchKind {
    pub fn classify(name: &str) -> Self {
        if let Some(trunk) = TrunkBranch::from_name(name) {
            return BranchKind::Trunk(trunk);
        }
        match name.strip_prefix(RELEASE_PREFIX) {
            Some(version) if !version.is_empty() => BranchKind::Release(version.to_string()),
            _ => BranchKind::Other,
        }
    }
}

/// Name of the release branch for a version
pub fn release_branch_name(version: &semver::Version) -> String {
    format!("{}{}", RELEASE_PREFIX, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_trunk() {
        assert_eq!(
            BranchKind::classify("main"),
            BranchKind::Trunk(TrunkBranch::Main)
        );
        assert_eq!(
            BranchKind::classify("master"),
            BranchKind::Trunk(TrunkBranch::Master)
        );
        assert_eq!(
            BranchKind::classify("develop"),
            BranchKind::Trunk(TrunkBranch::Develop)
        );
    }

    #[test]
    fn test_classify_release() {
        assert_eq!(
            BranchKind::classify("release/v2.0.0"),
            BranchKind::Release("2.0.0".to_string())
        );
        assert_eq!(BranchKind::classify("release/v"), BranchKind::Other);
        assert_eq!(BranchKind::classify("release/2.0.0"), BranchKind::Other);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(BranchKind::classify("feature/x"), BranchKind::Other);
        assert_eq!(BranchKind::classify("mainline"), BranchKind::Other);
        assert_eq!(BranchKind::classify(""), BranchKind::Other);
    }

    #[test]
    fn test_from_remote_ref() {
        assert_eq!(
            TrunkBranch::from_remote_ref("remotes/origin/develop", "origin"),
            Some(TrunkBranch::Develop)
        );
        assert_eq!(
            TrunkBranch::from_remote_ref("remotes/upstream/main", "upstream"),
            Some(TrunkBranch::Main)
        );
        assert_eq!(TrunkBranch::from_remote_ref("main", "origin"), None);
        assert_eq!(
            TrunkBranch::from_remote_ref("remotes/upstream/main", "origin"),
            None
        );
        assert_eq!(
            TrunkBranch::from_remote_ref("remotes/origin/HEAD -> origin/main", "origin"),
            None
        );
        assert_eq!(
            TrunkBranch::from_remote_ref("remotes/origin/feature/main", "origin"),
            None
        );
    }

    #[test]
    fn test_production_branches() {
        assert!(TrunkBranch::Main.is_production());
        assert!(TrunkBranch::Master.is_production());
        assert!(!TrunkBranch::Develop.is_production());
    }

    #[test]
    fn test_release_branch_name() {
        let version = semver::Version::new(1, 4, 0);
        assert_eq!(release_branch_name(&version), "release/v1.4.0");
    }
}
