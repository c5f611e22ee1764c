// ABOUTME: Local development server strategy.
// ABOUTME: Runs the dev command in the foreground; Ctrl+C ends it successfully.

use crate::config::{EnvironmentSpec, resolve_env_map};
use crate::diagnostics::{Diagnostics, Warning};
use crate::shell::ForegroundExit;

use super::error::DeployError;
use super::strategy::PublishContext;

pub(crate) async fn publish(
    spec: &EnvironmentSpec,
    ctx: &PublishContext<'_>,
    diag: &mut Diagnostics,
) -> Result<(), DeployError> {
    let settings = &spec.build_settings;
    let envs = resolve_env_map(&spec.environment_variables)?;

    ctx.output.progress("  → Starting local development server...");
    ctx.output.progress(&format!(
        "  → Server will be available at: {}",
        settings.local_url()
    ));
    ctx.output.progress("  → Press Ctrl+C to stop the server");

    let command = ctx.command(&settings.dev_command, &envs);
    match ctx.executor.run_foreground(&command).await {
        ForegroundExit::Interrupted => {
            ctx.output.progress("  ✓ Development server stopped");
            Ok(())
        }
        ForegroundExit::Exited(Some(0)) => Ok(()),
        // Abnormal exits are not told apart from an interrupt.
        ForegroundExit::Exited(code) => {
            let how = code
                .map(|c| format!("exit code {c}"))
                .unwrap_or_else(|| "a signal".to_string());
            diag.warn(Warning::dev_server_exit(format!(
                "development server exited with {how}: {}",
                settings.dev_command
            )));
            Ok(())
        }
        ForegroundExit::SpawnFailed(reason) => Err(DeployError::DevServerFailed(reason)),
    }
}
