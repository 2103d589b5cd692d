// Child process execution

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::launch::command::{CommandSpec, CommandStatus};

/// Seam for running a single command to completion. Lets the orchestrator
/// be exercised without spawning real processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run one command, block until it terminates, and report its status
    async fn run(&self, spec: &CommandSpec) -> CommandStatus;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<T> {
    async fn run(&self, spec: &CommandSpec) -> CommandStatus {
        (**self).run(spec).await
    }
}

/// Real runner backed by OS child processes. Stdio is inherited so child
/// output reaches the operator's console.
pub struct ProcessRunner {
    command_timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self {
            command_timeout: None,
        }
    }

    /// Kill any command that runs longer than `limit` and record it as
    /// timed out. Off by default: the final service command is expected to
    /// run in the foreground for as long as the service lives.
    pub fn with_command_timeout(mut self, limit: Duration) -> Self {
        self.command_timeout = Some(limit);
        self
    }

    fn build_command(&self, spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        cmd
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> CommandStatus {
        let mut child = match self.build_command(spec).spawn() {
            Ok(child) => child,
            Err(e) => {
                return CommandStatus::StartFailed {
                    message: e.to_string(),
                }
            }
        };

        let waited = match self.command_timeout {
            Some(limit) => match timeout(limit, child.wait()).await {
                Ok(result) => result,
                Err(_) => {
                    let _ = child.kill().await;
                    return CommandStatus::TimedOut { after: limit };
                }
            },
            None => child.wait().await,
        };

        match waited {
            Ok(status) if status.success() => CommandStatus::Succeeded,
            Ok(status) => CommandStatus::Failed {
                exit_code: status.code().unwrap_or(-1),
            },
            Err(e) => CommandStatus::StartFailed {
                message: e.to_string(),
            },
        }
    }
}
