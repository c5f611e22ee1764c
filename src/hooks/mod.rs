// ABOUTME: Hooks system for deployment lifecycle events.
// ABOUTME: Runs the configured pre-deploy and post-deploy commands with their failure policy.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::EnvironmentSpec;
use crate::shell::{CommandExecutor, CommandOutput, ShellCommand};

/// Hook execution points in the deployment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    /// Before publishing. Failure aborts deployment.
    PreDeploy,
    /// After publishing. Failure logs warning.
    PostDeploy,
}

impl HookPoint {
    pub fn name(&self) -> &'static str {
        match self {
            HookPoint::PreDeploy => "pre-deploy",
            HookPoint::PostDeploy => "post-deploy",
        }
    }

    /// Whether failure at this hook point should abort deployment.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HookPoint::PreDeploy)
    }
}

/// Context passed to hooks via environment variables.
#[derive(Debug, Clone)]
pub struct HookContext {
    pub environment: String,
    pub platform: String,
    pub domain: Option<String>,
}

impl HookContext {
    pub fn new(environment: &str, spec: &EnvironmentSpec) -> Self {
        Self {
            environment: environment.to_string(),
            platform: spec.platform_label().to_string(),
            domain: spec.domain().map(str::to_string),
        }
    }

    /// Convert context to environment variables.
    pub fn to_env(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("WEBSHIP_ENVIRONMENT".to_string(), self.environment.clone());
        env.insert("WEBSHIP_PLATFORM".to_string(), self.platform.clone());
        if let Some(ref domain) = self.domain {
            env.insert("WEBSHIP_DOMAIN".to_string(), domain.clone());
        }
        env
    }
}

/// Result of one hook command.
#[derive(Debug, Clone)]
pub struct HookResult {
    pub command: String,
    pub output: CommandOutput,
}

impl HookResult {
    pub fn success(&self) -> bool {
        self.output.success
    }
}

/// Every hook attempted at one hook point, in order.
#[derive(Debug, Clone, Default)]
pub struct HookReport {
    pub results: Vec<HookResult>,
}

impl HookReport {
    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &HookResult> {
        self.results.iter().filter(|r| !r.success())
    }

    pub fn first_failure(&self) -> Option<&HookResult> {
        self.failures().next()
    }

    pub fn all_succeeded(&self) -> bool {
        self.first_failure().is_none()
    }
}

/// Runs configured hook commands through a [`CommandExecutor`].
pub struct HookRunner<'a> {
    executor: &'a dyn CommandExecutor,
    working_dir: PathBuf,
}

impl<'a> HookRunner<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, working_dir: &Path) -> Self {
        Self {
            executor,
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Run `commands` in order.
    ///
    /// For fatal hook points the first failing command stops the run; for the
    /// others every command is attempted.
    pub async fn run(
        &self,
        point: HookPoint,
        commands: &[String],
        context: &HookContext,
    ) -> HookReport {
        let mut report = HookReport::default();
        if commands.is_empty() {
            return report;
        }

        tracing::info!("Running {} {} hook(s)", commands.len(), point.name());
        let env_vars = context.to_env();

        for command in commands {
            let shell = ShellCommand::new(command.as_str())
                .envs(env_vars.clone())
                .working_dir(&self.working_dir);
            let output = self.executor.run(&shell).await;
            let failed = !output.success;

            if failed {
                tracing::warn!(
                    "{} hook failed with exit code {:?}: {}",
                    point.name(),
                    output.exit_code,
                    command
                );
            }

            report.results.push(HookResult {
                command: command.clone(),
                output,
            });

            if failed && point.is_fatal() {
                break;
            }
        }

        report
    }
}
