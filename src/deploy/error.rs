// ABOUTME: Error types for deployment pipeline stages.
// ABOUTME: Covers resolution, precheck, pre-deploy hook, and publish failures.

use std::path::PathBuf;

use crate::config::UnknownEnvironment;
use crate::error::Error;

/// Fatal errors that stop a deployment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeployError {
    #[error(transparent)]
    UnknownEnvironment(#[from] UnknownEnvironment),

    /// A file listed as required does not exist.
    #[error("required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A pre-deploy hook exited non-zero or could not start.
    #[error("pre-deploy script failed ({}): {command}", exit_label(.exit_code))]
    PreHookFailed {
        command: String,
        exit_code: Option<i32>,
    },

    /// The environment's type tag has no publish strategy.
    #[error("unknown server type: {0}")]
    UnknownPlatform(String),

    /// An environment variable reference could not be resolved.
    #[error("failed to resolve environment variables: {0}")]
    EnvResolution(String),

    /// The build command exited non-zero.
    #[error("build failed ({}): {command}", exit_label(.exit_code))]
    BuildFailed {
        command: String,
        exit_code: Option<i32>,
    },

    /// The platform publish command exited non-zero.
    #[error("publish failed ({}): {command}", exit_label(.exit_code))]
    PublishFailed {
        command: String,
        exit_code: Option<i32>,
    },

    /// The local development server could not be started.
    #[error("failed to start development server: {0}")]
    DevServerFailed(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code".to_string(),
    }
}

/// Coarse classification of [`DeployError`] by pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    UnknownEnvironment,
    Precheck,
    PreHook,
    Publish,
}

impl DeployError {
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::UnknownEnvironment(_) => DeployErrorKind::UnknownEnvironment,
            DeployError::MissingFile(_) => DeployErrorKind::Precheck,
            DeployError::PreHookFailed { .. } => DeployErrorKind::PreHook,
            DeployError::UnknownPlatform(_)
            | DeployError::EnvResolution(_)
            | DeployError::BuildFailed { .. }
            | DeployError::PublishFailed { .. }
            | DeployError::DevServerFailed(_) => DeployErrorKind::Publish,
        }
    }
}

impl From<Error> for DeployError {
    fn from(err: Error) -> Self {
        match err {
            Error::UnknownEnvironment(e) => DeployError::UnknownEnvironment(e),
            other => DeployError::EnvResolution(other.to_string()),
        }
    }
}
