// Command sequence value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::time::Duration;

use crate::launch::error::LaunchError;

/// Timestamp type
pub type Timestamp = DateTime<Utc>;

/// A single named shell invocation: a program plus its arguments, with an
/// implicit expectation of exit code 0 on success. Value object, built
/// fresh per launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Create a command with arguments
    pub fn with_args(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// An ordered list of commands for one launcher invocation. Total order
/// significant; never mutated after construction.
pub type CommandSequence = Vec<CommandSpec>;

/// Terminal state of a single command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandStatus {
    /// The command ran and exited zero
    Succeeded,
    /// The command ran and exited non-zero
    Failed { exit_code: i32 },
    /// The OS could not create the child process
    StartFailed { message: String },
    /// The command exceeded the configured per-command timeout
    TimedOut { after: Duration },
}

impl CommandStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandStatus::Succeeded)
    }
}

/// Result of one command in the sequence, created at command completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOutcome {
    pub command: CommandSpec,
    pub status: CommandStatus,
    pub completed_at: Timestamp,
}

impl LaunchOutcome {
    pub fn new(command: CommandSpec, status: CommandStatus) -> Self {
        Self {
            command,
            status,
            completed_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Operator-facing description of this outcome
    pub fn describe(&self) -> String {
        match &self.status {
            CommandStatus::Succeeded => format!("'{}' completed", self.command),
            CommandStatus::Failed { exit_code } => {
                format!("'{}' failed with exit code: {}", self.command, exit_code)
            }
            CommandStatus::StartFailed { message } => {
                format!(
                    "An error occurred while executing '{}': {}",
                    self.command, message
                )
            }
            CommandStatus::TimedOut { after } => {
                format!("'{}' timed out after {:?}", self.command, after)
            }
        }
    }

    /// Map a non-success outcome onto the launch error taxonomy
    pub fn as_error(&self) -> Option<LaunchError> {
        match &self.status {
            CommandStatus::Succeeded => None,
            CommandStatus::Failed { exit_code } => Some(LaunchError::command_failed(
                self.command.to_string(),
                *exit_code,
            )),
            CommandStatus::StartFailed { message } => Some(LaunchError::command_start(
                self.command.to_string(),
                io::Error::other(message.clone()),
            )),
            CommandStatus::TimedOut { after } => Some(LaunchError::CommandTimeout {
                command: self.command.to_string(),
                timeout: *after,
            }),
        }
    }
}

/// Accumulated outcomes of one launcher invocation, in execution order.
/// Under the fail-fast contract only the last outcome can be a failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchReport {
    pub outcomes: Vec<LaunchOutcome>,
}

impl LaunchReport {
    /// Whether every command in the sequence completed with exit code zero
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(LaunchOutcome::is_success)
    }

    /// The failing outcome, if any
    pub fn failure(&self) -> Option<&LaunchOutcome> {
        self.outcomes.iter().find(|outcome| !outcome.is_success())
    }

    /// Number of commands that were actually started
    pub fn commands_run(&self) -> usize {
        self.outcomes.len()
    }
}
