// ABOUTME: Pipeline stages and the result of one deployment run.
// ABOUTME: Keeps the success flag separate from the collected warnings.

use std::fmt;

use crate::diagnostics::Warning;

use super::error::DeployError;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Resolving,
    Validating,
    PreHooks,
    Publishing,
    HealthChecking,
    PostHooks,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resolving => "resolving",
            Stage::Validating => "validating",
            Stage::PreHooks => "pre-deploy hooks",
            Stage::Publishing => "publishing",
            Stage::HealthChecking => "health check",
            Stage::PostHooks => "post-deploy hooks",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of one `deploy` call. Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
    pub environment: String,
    /// `Done` on success, otherwise the stage that failed.
    pub stage: Stage,
    pub error: Option<DeployError>,
    pub warnings: Vec<Warning>,
}

impl DeploymentOutcome {
    pub(crate) fn succeeded(environment: &str, warnings: Vec<Warning>) -> Self {
        Self {
            environment: environment.to_string(),
            stage: Stage::Done,
            error: None,
            warnings,
        }
    }

    pub(crate) fn failed(
        environment: &str,
        stage: Stage,
        error: DeployError,
        warnings: Vec<Warning>,
    ) -> Self {
        Self {
            environment: environment.to_string(),
            stage,
            error: Some(error),
            warnings,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn failed_stage(&self) -> Option<Stage> {
        self.error.as_ref().map(|_| self.stage)
    }
}
