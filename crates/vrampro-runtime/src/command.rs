//! External command execution with captured output.
//!
//! Every OS request the runtime makes goes through `CommandExecutor`, so
//! adapters can be tested against canned outcomes instead of a real shell.

use async_trait::async_trait;
use std::io;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Captured result of one finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// A zero-exit outcome with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed outcome with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Best available explanation of a failure.
    ///
    /// Prefers stderr, falls back to stdout (some tools report errors
    /// there), then to the exit status.
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

impl From<Output> for CommandOutcome {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs a program to completion and captures its output.
///
/// No timeout is applied: a hung command hangs the caller.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Returns `Err` only when the program could not be started.
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutcome>;
}

/// Executes commands on the host via `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

#[async_trait]
impl CommandExecutor for SystemExecutor {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutcome> {
        debug!(program, ?args, "Running command");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;
        let outcome = CommandOutcome::from(output);
        debug!(program, code = ?outcome.code, "Command finished");
        Ok(outcome)
    }
}
