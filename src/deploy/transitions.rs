// ABOUTME: State transition methods for the deployment pipeline.
// ABOUTME: Each method consumes self and returns the next state; later stages cannot fail.

use crate::diagnostics::{Diagnostics, Warning};
use crate::health::HealthProbe;
use crate::hooks::{HookPoint, HookRunner};
use crate::output::Output;
use crate::shell::CommandExecutor;

use super::Deployment;
use super::error::DeployError;
use super::state::{Completed, Initialized, Prepared, Published, Validated, Verified};
use super::strategy::{PublishContext, PublishStrategy};

// =============================================================================
// Initialized -> Validated
// =============================================================================

impl<'a> Deployment<'a, Initialized> {
    /// Check that every required file exists before anything runs.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::MissingFile` for the first missing path.
    pub fn validate(self) -> Result<Deployment<'a, Validated>, DeployError> {
        for file in self.config.storage.required_files() {
            if !self.project_dir.join(file).exists() {
                return Err(DeployError::MissingFile(file.to_path_buf()));
            }
        }

        Ok(self.transition(Validated))
    }
}

// =============================================================================
// Validated -> Prepared
// =============================================================================

impl<'a> Deployment<'a, Validated> {
    /// Run the pre-deploy hooks in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::PreHookFailed` naming the failed command.
    pub async fn run_pre_deploy_hooks(
        self,
        executor: &dyn CommandExecutor,
    ) -> Result<Deployment<'a, Prepared>, DeployError> {
        let runner = HookRunner::new(executor, self.project_dir);
        let report = runner
            .run(
                HookPoint::PreDeploy,
                &self.config.deployment_scripts.pre_deploy,
                &self.hook_context(),
            )
            .await;

        if let Some(failure) = report.first_failure() {
            return Err(DeployError::PreHookFailed {
                command: failure.command.clone(),
                exit_code: failure.output.exit_code,
            });
        }

        Ok(self.transition(Prepared))
    }
}

// =============================================================================
// Prepared -> Published
// =============================================================================

impl<'a> Deployment<'a, Prepared> {
    /// Publish with the strategy selected by the environment's type.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::UnknownPlatform` for an unrecognized type, or the
    /// strategy's own error.
    pub async fn publish(
        self,
        executor: &dyn CommandExecutor,
        output: &Output,
        diag: &mut Diagnostics,
    ) -> Result<Deployment<'a, Published>, DeployError> {
        let strategy = PublishStrategy::for_environment(self.spec)?;
        tracing::info!(environment = %self.environment, %strategy, "publishing");

        let ctx = PublishContext {
            executor,
            working_dir: self.project_dir,
            output,
        };
        strategy.publish(self.spec, &ctx, diag).await?;

        Ok(self.transition(Published { strategy }))
    }
}

// =============================================================================
// Published -> Verified
// =============================================================================

impl<'a> Deployment<'a, Published> {
    /// Probe the deployed environment once. Failures become warnings.
    pub async fn health_check(
        self,
        probe: &dyn HealthProbe,
        output: &Output,
        diag: &mut Diagnostics,
    ) -> Deployment<'a, Verified> {
        let strategy = self.state.strategy;

        if !strategy.requires_health_check() {
            tracing::debug!(environment = %self.environment, "health check skipped");
            return self.transition(Verified { strategy });
        }

        match self.spec.domain() {
            None => diag.warn(Warning::health_check(format!(
                "no domain specified for '{}', health check skipped",
                self.environment
            ))),
            Some(domain) => {
                let url = self.config.monitoring.health_check.url_for(domain);
                output.progress(&format!("  → Checking health: {url}"));

                let result = probe.check(&url).await;
                if result.is_healthy() {
                    output.progress(&format!("  ✓ Health check passed: {url}"));
                } else {
                    diag.warn(Warning::health_check(format!(
                        "health check failed: {url} {result} (deployment may still be successful)"
                    )));
                }
            }
        }

        self.transition(Verified { strategy })
    }
}

// =============================================================================
// Verified -> Completed
// =============================================================================

impl<'a> Deployment<'a, Verified> {
    /// Run every post-deploy hook. Failures become warnings.
    pub async fn run_post_deploy_hooks(
        self,
        executor: &dyn CommandExecutor,
        diag: &mut Diagnostics,
    ) -> Deployment<'a, Completed> {
        let runner = HookRunner::new(executor, self.project_dir);
        let report = runner
            .run(
                HookPoint::PostDeploy,
                &self.config.deployment_scripts.post_deploy,
                &self.hook_context(),
            )
            .await;

        for failure in report.failures() {
            diag.warn(Warning::post_deploy_hook(format!(
                "post-deployment script failed: {}",
                failure.command
            )));
        }

        let strategy = self.state.strategy;
        self.transition(Completed { strategy })
    }
}
