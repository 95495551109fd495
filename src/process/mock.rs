use crate::error::{ReleaseError, Result};
use crate::process::{command_line, CommandRunner};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock runner for testing without spawning processes
///
/// Records every invocation in order. Captured-output calls return the text
/// scripted for their command line, or an empty string.
pub struct MockRunner {
    outputs: HashMap<String, String>,
    failures: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a new mock with no scripted output
    pub fn new() -> Self {
        MockRunner {
            outputs: HashMap::new(),
            failures: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the captured output of a command line such as `git branch -a`
    pub fn with_output(mut self, command: impl Into<String>, output: impl Into<String>) -> Self {
        self.outputs.insert(command.into(), output.into());
        self
    }

    /// Make a command line exit non-zero
    pub fn fail_on(mut self, command: impl Into<String>) -> Self {
        self.failures.insert(command.into());
        self
    }

    /// Every command line invoked so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Invocations of one program, in order
    pub fn calls_to(&self, program: &str) -> Vec<String> {
        let prefix = format!("{} ", program);
        self.calls()
            .into_iter()
            .filter(|c| c == program || c.starts_with(&prefix))
            .collect()
    }

    fn record(&self, program: &str, args: &[&str]) -> Result<String> {
        let line = command_line(program, args);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line.clone());
        }
        if self.failures.contains(&line) {
            return Err(ReleaseError::external_tool(line, "exit status: 1"));
        }
        Ok(line)
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        self.record(program, args).map(|_| ())
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        let line = self.record(program, args)?;
        Ok(self.outputs.get(&line).cloned().unwrap_or_default())
    }
}
