use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type for launch operations
pub type LaunchResult<T> = std::result::Result<T, LaunchError>;

/// Errors that can occur while launching the command sequence
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The operating environment is neither Windows- nor POSIX-family.
    /// Fatal before any command is built or run.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),

    /// The OS could not create the child process
    #[error("An error occurred while executing '{command}': {source}")]
    CommandStart {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The child process ran and exited non-zero
    #[error("'{command}' failed with exit code: {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },

    /// The child process exceeded the configured per-command timeout
    #[error("'{command}' timed out after {timeout:?}")]
    CommandTimeout { command: String, timeout: Duration },
}

impl LaunchError {
    /// Create a new unsupported-platform error
    pub fn unsupported(identifier: impl Into<String>) -> Self {
        Self::UnsupportedPlatform(identifier.into())
    }

    /// Create a new command-start error
    pub fn command_start(command: impl Into<String>, source: io::Error) -> Self {
        Self::CommandStart {
            command: command.into(),
            source,
        }
    }

    /// Create a new command-failed error
    pub fn command_failed(command: impl Into<String>, exit_code: i32) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
        }
    }
}
