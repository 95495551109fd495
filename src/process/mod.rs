//! External process abstraction layer
//!
//! Every `git` and `gh` invocation goes through the [CommandRunner] trait so
//! the workflows can be driven by a recording [MockRunner] in tests.
//!
//! - [SystemRunner]: spawns real processes in a working directory
//! - [MockRunner]: records invocations and returns scripted output

pub mod mock;

pub use mock::MockRunner;

use crate::error::{ReleaseError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Runs external programs on behalf of the workflows.
///
/// All implementors must be `Send + Sync`.
pub trait CommandRunner: Send + Sync {
    /// Run a program with inherited stdin/stdout/stderr so the operator sees
    /// live progress.
    ///
    /// # Returns
    /// * `Ok(())` - The program exited successfully
    /// * `Err` - [ReleaseError::ExternalTool] on spawn failure or non-zero exit
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;

    /// Run a program and capture stdout followed by stderr as one string,
    /// with trailing newlines trimmed.
    ///
    /// # Returns
    /// * `Ok(String)` - Combined output of a successful run
    /// * `Err` - [ReleaseError::ExternalTool] on spawn failure or non-zero exit
    fn output(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Render a command line for messages and logs
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs real processes inside a repository checkout
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        SystemRunner { cwd: cwd.into() }
    }

    fn command(&self, program: &str, args: &[&str]) -> Command {
        log::debug!(
            "running `{}` in {}",
            command_line(program, args),
            self.cwd.display()
        );
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(&self.cwd);
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let status = self
            .command(program, args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ReleaseError::external_tool(command_line(program, args), e.to_string()))?;

        if !status.success() {
            return Err(ReleaseError::external_tool(
                command_line(program, args),
                status.to_string(),
            ));
        }

        Ok(())
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = self
            .command(program, args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ReleaseError::external_tool(command_line(program, args), e.to_string()))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim_end_matches(['\n', '\r']).to_string();

        if !output.status.success() {
            return Err(ReleaseError::external_tool(
                command_line(program, args),
                format!("{}\n{}", output.status, combined),
            ));
        }

        log::trace!("`{}` produced {} bytes", command_line(program, args), combined.len());
        Ok(combined)
    }
}
