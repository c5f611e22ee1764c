// ABOUTME: Hosted-platform publish strategy.
// ABOUTME: Runs the build command, then the platform CLI with the right publish flag.

use crate::config::{EnvironmentSpec, resolve_env_map};
use crate::shell::CommandOutput;

use super::error::DeployError;
use super::strategy::PublishContext;

/// Flag passed to the platform CLI for production environments.
pub const PRODUCTION_FLAG: &str = "--prod";

/// Command line that uploads the build for `spec`.
pub fn publish_command_line(spec: &EnvironmentSpec) -> String {
    let command = spec.build_settings.publish_command.trim();
    if spec.is_production() {
        format!("{command} {PRODUCTION_FLAG}")
    } else {
        command.to_string()
    }
}

pub(crate) async fn publish(
    spec: &EnvironmentSpec,
    ctx: &PublishContext<'_>,
) -> Result<(), DeployError> {
    ctx.output.progress(&format!(
        "  → Deploying to hosted platform: {}",
        spec.domain().unwrap_or("Unknown")
    ));

    let envs = resolve_env_map(&spec.environment_variables)?;
    if !envs.is_empty() {
        tracing::debug!(count = envs.len(), "passing environment variables to build");
    }

    let build = spec.build_settings.build_command.as_str();
    ctx.output.progress(&format!("  → Building: {build}"));
    let output = ctx.executor.run(&ctx.command(build, &envs)).await;
    if !output.success {
        report_failure(ctx, &output);
        return Err(DeployError::BuildFailed {
            command: build.to_string(),
            exit_code: output.exit_code,
        });
    }

    let publish = publish_command_line(spec);
    ctx.output.progress(&format!("  → Publishing: {publish}"));
    let output = ctx.executor.run(&ctx.command(&publish, &envs)).await;
    if !output.success {
        report_failure(ctx, &output);
        return Err(DeployError::PublishFailed {
            command: publish,
            exit_code: output.exit_code,
        });
    }

    Ok(())
}

fn report_failure(ctx: &PublishContext<'_>, output: &CommandOutput) {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        ctx.output.progress(stderr);
    }
}
