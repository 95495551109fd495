use thiserror::Error;

/// Unified error type for release-tool operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Version control query failed: {0}")]
    Vcs(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("External command `{command}` failed: {reason}")]
    ExternalTool { command: String, reason: String },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Changelog error: {0}")]
    Changelog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in release-tool
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version control error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        ReleaseError::Vcs(msg.into())
    }

    /// Create an invalid version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidVersion(msg.into())
    }

    /// Create a precondition error with context
    pub fn precondition(msg: impl Into<String>) -> Self {
        ReleaseError::Precondition(msg.into())
    }

    /// Create an external tool error for a command line
    pub fn external_tool(command: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseError::ExternalTool {
            command: command.into(),
            reason: reason.into(),
        }
    }

    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    pub fn changelog(msg: impl Into<String>) -> Self {
        ReleaseError::Changelog(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}
