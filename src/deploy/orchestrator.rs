// ABOUTME: Sequences the deployment pipeline for one environment.
// ABOUTME: Converts fatal stage errors into a DeploymentOutcome with collected warnings.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::health::HealthProbe;
use crate::output::Output;
use crate::shell::CommandExecutor;

use super::Deployment;
use super::error::DeployError;
use super::outcome::{DeploymentOutcome, Stage};

/// Runs resolve, validate, pre-deploy hooks, publish, health check and
/// post-deploy hooks, in that order, for a single environment.
pub struct Orchestrator<'a> {
    config: &'a Config,
    executor: &'a dyn CommandExecutor,
    probe: &'a dyn HealthProbe,
    project_dir: PathBuf,
    output: &'a Output,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: &'a Config,
        executor: &'a dyn CommandExecutor,
        probe: &'a dyn HealthProbe,
        project_dir: &Path,
        output: &'a Output,
    ) -> Self {
        Self {
            config,
            executor,
            probe,
            project_dir: project_dir.to_path_buf(),
            output,
        }
    }

    /// Deploy `environment`. Never panics or returns early on failure: the
    /// outcome carries the failed stage and error.
    pub async fn deploy(&self, environment: &str) -> DeploymentOutcome {
        let mut diag = Diagnostics::default();

        match self.run(environment, &mut diag).await {
            Ok(()) => DeploymentOutcome::succeeded(environment, diag.into_warnings()),
            Err((stage, error)) => {
                tracing::error!(environment, %stage, "deployment failed: {}", error);
                DeploymentOutcome::failed(environment, stage, error, diag.into_warnings())
            }
        }
    }

    async fn run(
        &self,
        environment: &str,
        diag: &mut Diagnostics,
    ) -> Result<(), (Stage, DeployError)> {
        let output = self.output;
        output.progress(&format!("Starting deployment to {environment}..."));

        let deployment = Deployment::new(self.config, environment, &self.project_dir)
            .map_err(at(Stage::Resolving))?;

        output.progress("  → Running pre-deployment checks...");
        let deployment = deployment.validate().map_err(at(Stage::Validating))?;

        if !self.config.deployment_scripts.pre_deploy.is_empty() {
            output.progress("  → Running pre-deployment scripts...");
        }
        let deployment = deployment
            .run_pre_deploy_hooks(self.executor)
            .await
            .map_err(at(Stage::PreHooks))?;

        let deployment = deployment
            .publish(self.executor, output, diag)
            .await
            .map_err(at(Stage::Publishing))?;

        let deployment = deployment.health_check(self.probe, output, diag).await;

        if !self.config.deployment_scripts.post_deploy.is_empty() {
            output.progress("  → Running post-deployment scripts...");
        }
        let deployment = deployment
            .run_post_deploy_hooks(self.executor, diag)
            .await;

        tracing::info!(
            environment,
            strategy = %deployment.state().strategy(),
            "deployment finished"
        );
        Ok(())
    }
}

fn at(stage: Stage) -> impl FnOnce(DeployError) -> (Stage, DeployError) {
    move |error| (stage, error)
}
