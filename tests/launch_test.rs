// Integration tests for the sequential launch orchestrator

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use ignition::launch::{
    CommandRunner, CommandSpec, CommandStatus, LaunchError, Orchestrator, ProcessRunner,
    SERVER_PLAN, TUI_PLAN,
};
use ignition::platform::PlatformClass;

/// Runner that records every command it is asked to run and replays a
/// scripted status per call (defaulting to success once the script runs
/// out). No real processes are spawned.
struct ScriptedRunner {
    executed: Mutex<Vec<String>>,
    statuses: Mutex<Vec<CommandStatus>>,
}

impl ScriptedRunner {
    fn succeeding() -> Arc<Self> {
        Self::with_statuses(Vec::new())
    }

    fn with_statuses(statuses: Vec<CommandStatus>) -> Arc<Self> {
        Arc::new(Self {
            executed: Mutex::new(Vec::new()),
            statuses: Mutex::new(statuses),
        })
    }

    fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, spec: &CommandSpec) -> CommandStatus {
        self.executed.lock().unwrap().push(spec.to_string());
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.is_empty() {
            CommandStatus::Succeeded
        } else {
            statuses.remove(0)
        }
    }
}

#[tokio::test]
async fn scenario_a_posix_all_commands_succeed() {
    let runner = ScriptedRunner::succeeding();
    let orchestrator = Orchestrator::with_runner(runner.clone());
    let report = orchestrator
        .launch(PlatformClass::Posix, &SERVER_PLAN)
        .await
        .unwrap();

    assert!(report.succeeded());
    assert_eq!(report.commands_run(), 4);
    assert_eq!(
        runner.executed(),
        vec![
            "chmod u+x ./config/update_server_keys/target/release/update_server_keys",
            "chmod u+x ./server/target/release/server",
            "./config/update_server_keys/target/release/update_server_keys",
            "./server/target/release/server",
        ]
    );
}

#[tokio::test]
async fn scenario_b_posix_first_grant_fails() {
    let runner = ScriptedRunner::with_statuses(vec![CommandStatus::Failed { exit_code: 1 }]);
    let orchestrator = Orchestrator::with_runner(runner.clone());
    let report = orchestrator
        .launch(PlatformClass::Posix, &SERVER_PLAN)
        .await
        .unwrap();

    assert!(!report.succeeded());
    assert_eq!(report.commands_run(), 1);
    assert_eq!(runner.executed().len(), 1);

    let description = report.failure().unwrap().describe();
    assert!(description
        .contains("chmod u+x ./config/update_server_keys/target/release/update_server_keys"));
    assert!(description.contains("exit code: 1"));
}

#[tokio::test]
async fn scenario_c_windows_second_command_fails_to_start() {
    let runner = ScriptedRunner::with_statuses(vec![
        CommandStatus::Succeeded,
        CommandStatus::StartFailed {
            message: "program not found".to_string(),
        },
    ]);
    let orchestrator = Orchestrator::with_runner(runner.clone());
    let report = orchestrator
        .launch(PlatformClass::Windows, &SERVER_PLAN)
        .await
        .unwrap();

    assert_eq!(report.commands_run(), 2);
    assert_eq!(runner.executed().len(), 2);
    assert!(report.outcomes[0].is_success());

    let failure = report.failure().unwrap();
    assert!(matches!(failure.status, CommandStatus::StartFailed { .. }));
    assert!(matches!(
        failure.as_error(),
        Some(LaunchError::CommandStart { .. })
    ));
    assert_eq!(
        failure.command.to_string(),
        ".\\server\\target\\release\\server.exe"
    );
}

#[tokio::test]
async fn unsupported_platform_runs_nothing() {
    for plan in [&SERVER_PLAN, &TUI_PLAN] {
        let runner = ScriptedRunner::succeeding();
        let orchestrator = Orchestrator::with_runner(runner.clone());
        let result = orchestrator.launch(PlatformClass::Unsupported, plan).await;

        assert!(matches!(result, Err(LaunchError::UnsupportedPlatform(_))));
        assert!(runner.executed().is_empty());
    }
}

#[tokio::test]
async fn fail_fast_stops_after_kth_command() {
    let runner = ScriptedRunner::with_statuses(vec![
        CommandStatus::Succeeded,
        CommandStatus::Succeeded,
        CommandStatus::Failed { exit_code: 7 },
    ]);
    let orchestrator = Orchestrator::with_runner(runner.clone());

    let sequence: Vec<CommandSpec> = (1..=5)
        .map(|n| CommandSpec::new(format!("./step-{}", n)))
        .collect();
    let report = orchestrator.run_sequence(&sequence).await;

    assert_eq!(report.commands_run(), 3);
    assert_eq!(runner.executed(), vec!["./step-1", "./step-2", "./step-3"]);
    assert_eq!(
        report.failure().unwrap().status,
        CommandStatus::Failed { exit_code: 7 }
    );
}

#[tokio::test]
async fn single_binary_variant_runs_one_binary() {
    let runner = ScriptedRunner::succeeding();
    let orchestrator = Orchestrator::with_runner(runner.clone());
    let report = orchestrator
        .launch(PlatformClass::Windows, &TUI_PLAN)
        .await
        .unwrap();

    assert!(report.succeeded());
    assert_eq!(report.commands_run(), 1);
    assert_eq!(runner.executed(), vec![".\\tui\\target\\release\\tui.exe"]);
}

#[cfg(unix)]
mod real_processes {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn sequence_stops_at_first_real_failure() {
        let orchestrator = Orchestrator::with_runner(ProcessRunner::new());
        let sequence = vec![
            CommandSpec::new("true"),
            CommandSpec::new("false"),
            CommandSpec::new("true"),
        ];

        let report = orchestrator.run_sequence(&sequence).await;

        assert_eq!(report.commands_run(), 2);
        assert!(report.outcomes[0].is_success());
        assert_eq!(
            report.outcomes[1].status,
            CommandStatus::Failed { exit_code: 1 }
        );
    }

    #[tokio::test]
    async fn grant_then_execute_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("service.sh");
        {
            let mut file = std::fs::File::create(&script).unwrap();
            writeln!(file, "#!/bin/sh").unwrap();
            writeln!(file, "exit 0").unwrap();
        }
        let script = script.to_string_lossy().to_string();

        let orchestrator = Orchestrator::with_runner(ProcessRunner::new());
        let sequence = vec![
            CommandSpec::with_args("chmod", ["u+x".to_string(), script.clone()]),
            CommandSpec::new(script),
        ];

        let report = orchestrator.run_sequence(&sequence).await;
        assert!(report.succeeded());
        assert_eq!(report.commands_run(), 2);
    }

    #[tokio::test]
    async fn missing_binary_reports_start_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir
            .path()
            .join("no_such_binary")
            .to_string_lossy()
            .to_string();

        let orchestrator = Orchestrator::with_runner(ProcessRunner::new());
        let sequence = vec![CommandSpec::new(missing.clone()), CommandSpec::new("true")];

        let report = orchestrator.run_sequence(&sequence).await;

        assert_eq!(report.commands_run(), 1);
        let failure = report.failure().unwrap();
        assert!(matches!(failure.status, CommandStatus::StartFailed { .. }));
        assert!(failure.describe().contains(&missing));
    }
}
