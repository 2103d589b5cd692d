// Fail-fast sequential command execution

use crate::launch::command::{CommandSequence, LaunchOutcome, LaunchReport};
use crate::launch::error::{LaunchError, LaunchResult};
use crate::launch::plan::LaunchPlan;
use crate::launch::runner::{CommandRunner, ProcessRunner};
use crate::platform::PlatformClass;

/// Drives one launcher invocation: builds the platform's command sequence
/// and runs it strictly in order, stopping at the first non-success
/// outcome. Single-threaded and synchronous by design; command N+1 never
/// starts before command N's termination is observed.
pub struct Orchestrator<R: CommandRunner> {
    runner: R,
}

impl Orchestrator<ProcessRunner> {
    /// Orchestrator backed by real child processes
    pub fn new() -> Self {
        Self {
            runner: ProcessRunner::new(),
        }
    }
}

impl Default for Orchestrator<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Orchestrator<R> {
    /// Orchestrator backed by a custom runner
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Launch a plan on the given platform.
    ///
    /// An unsupported platform is fatal before any command is built or
    /// run. Otherwise the plan's sequence is executed fail-fast and the
    /// accumulated report returned; overall success means every command
    /// exited zero.
    pub async fn launch(
        &self,
        platform: PlatformClass,
        plan: &LaunchPlan,
    ) -> LaunchResult<LaunchReport> {
        if !platform.is_supported() {
            return Err(LaunchError::unsupported(std::env::consts::OS));
        }

        let sequence = plan.command_sequence(platform)?;
        log::info!(
            "Launching '{}' on {}: {} commands",
            plan.name,
            platform,
            sequence.len()
        );

        let report = self.run_sequence(&sequence).await;
        log::debug!(
            "Launch report: {}",
            serde_json::to_string(&report).unwrap_or_default()
        );
        Ok(report)
    }

    /// Run an already-built sequence in order, stopping at the first
    /// command that does not succeed.
    pub async fn run_sequence(&self, sequence: &CommandSequence) -> LaunchReport {
        let mut report = LaunchReport::default();

        for spec in sequence {
            log::info!("Running '{}'", spec);
            let status = self.runner.run(spec).await;
            let outcome = LaunchOutcome::new(spec.clone(), status);

            if outcome.is_success() {
                report.outcomes.push(outcome);
                continue;
            }

            // Fail-fast: report the failure, later commands never start.
            log::error!("{}", outcome.describe());
            report.outcomes.push(outcome);
            break;
        }

        report
    }
}
