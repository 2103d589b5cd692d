// Multi-binary launcher: key rotation helper, then the service itself.

use anyhow::Result;

use ignition::launch::{EXIT_COMMAND_FAILED, EXIT_UNSUPPORTED, LaunchError, Orchestrator, SERVER_PLAN};
use ignition::platform;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let platform = platform::resolve();
    let report = match Orchestrator::new().launch(platform, &SERVER_PLAN).await {
        Ok(report) => report,
        Err(e @ LaunchError::UnsupportedPlatform(_)) => {
            log::error!("{}", e);
            std::process::exit(EXIT_UNSUPPORTED);
        }
        Err(e) => return Err(e.into()),
    };

    if !report.succeeded() {
        std::process::exit(EXIT_COMMAND_FAILED);
    }
    Ok(())
}
