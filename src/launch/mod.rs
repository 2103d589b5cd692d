// Sequential launch orchestration
//
// This module builds the per-platform command sequence for a launcher
// variant and executes it strictly in order with fail-fast semantics.

pub mod command;
pub mod error;
pub mod orchestrator;
pub mod plan;
pub mod runner;

// Re-exports
pub use command::{CommandSequence, CommandSpec, CommandStatus, LaunchOutcome, LaunchReport};
pub use error::{LaunchError, LaunchResult};
pub use orchestrator::Orchestrator;
pub use plan::{LaunchPlan, SERVER_PLAN, TUI_PLAN};
pub use runner::{CommandRunner, ProcessRunner};

/// Launcher process exit code: every command succeeded
pub const EXIT_OK: i32 = 0;

/// Launcher process exit code: unsupported platform, nothing was run
pub const EXIT_UNSUPPORTED: i32 = 1;

/// Launcher process exit code: a command failed to start or exited non-zero
pub const EXIT_COMMAND_FAILED: i32 = 2;
