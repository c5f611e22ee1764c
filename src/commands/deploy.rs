// ABOUTME: Deploy command implementation.
// ABOUTME: Wires the shell executor and HTTP probe into the orchestrator and reports the outcome.

use std::path::Path;
use webship::config::Config;
use webship::deploy::Orchestrator;
use webship::error::Result;
use webship::health::HttpProbe;
use webship::output::Output;
use webship::shell::ShellExecutor;

/// Deploy one environment. Returns whether the deployment succeeded.
pub async fn deploy(
    config: &Config,
    project_dir: &Path,
    environment: &str,
    output: &mut Output,
) -> Result<bool> {
    output.start_timer();

    let executor = ShellExecutor;
    let probe = HttpProbe::new(config.monitoring.health_check.timeout)?;

    let outcome = Orchestrator::new(config, &executor, &probe, project_dir, output)
        .deploy(environment)
        .await;

    // Emit collected warnings
    for warning in &outcome.warnings {
        output.warning(&warning.message);
    }

    match outcome.error {
        None => {
            output.success(&format!("Deployment to {environment} completed!"));
            Ok(true)
        }
        Some(ref e) => {
            output.error(&format!(
                "deployment to {environment} failed during {}: {e}",
                outcome.stage
            ));
            Ok(false)
        }
    }
}
