// ABOUTME: Publish strategy selection based on the environment type tag.
// ABOUTME: Dispatches publishing to the hosted-platform or local-dev implementation.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::EnvironmentSpec;
use crate::diagnostics::Diagnostics;
use crate::output::Output;
use crate::shell::{CommandExecutor, ShellCommand};

use super::error::DeployError;
use super::{hosted, local};

/// How an environment receives the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStrategy {
    /// Build, then upload with the hosting platform's CLI.
    Hosted,

    /// Run the development server in the foreground until interrupted.
    Local,
}

impl PublishStrategy {
    /// Select the strategy for an environment's `type` tag.
    ///
    /// `vercel` is accepted as an alias of `hosted`. Matching ignores ASCII case.
    pub fn for_environment(spec: &EnvironmentSpec) -> Result<Self, DeployError> {
        let tag = spec.platform_label();
        if tag.eq_ignore_ascii_case("hosted") || tag.eq_ignore_ascii_case("vercel") {
            Ok(PublishStrategy::Hosted)
        } else if tag.eq_ignore_ascii_case("local") {
            Ok(PublishStrategy::Local)
        } else {
            Err(DeployError::UnknownPlatform(tag.to_string()))
        }
    }

    /// Whether a deployed environment should be probed afterwards.
    pub fn requires_health_check(&self) -> bool {
        matches!(self, PublishStrategy::Hosted)
    }

    pub async fn publish(
        self,
        spec: &EnvironmentSpec,
        ctx: &PublishContext<'_>,
        diag: &mut Diagnostics,
    ) -> Result<(), DeployError> {
        match self {
            PublishStrategy::Hosted => hosted::publish(spec, ctx).await,
            PublishStrategy::Local => local::publish(spec, ctx, diag).await,
        }
    }
}

impl fmt::Display for PublishStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishStrategy::Hosted => write!(f, "hosted"),
            PublishStrategy::Local => write!(f, "local"),
        }
    }
}

/// What a strategy needs to run commands and report progress.
pub struct PublishContext<'a> {
    pub executor: &'a dyn CommandExecutor,
    pub working_dir: &'a Path,
    pub output: &'a Output,
}

impl PublishContext<'_> {
    /// A command running in the project directory with `envs` added.
    pub fn command(&self, command: &str, envs: &HashMap<String, String>) -> ShellCommand {
        ShellCommand::new(command)
            .envs(envs.clone())
            .working_dir(self.working_dir)
    }
}
