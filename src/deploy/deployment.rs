// ABOUTME: Generic deployment struct parameterized by state marker.
// ABOUTME: Borrows the configuration and the resolved target for the whole run.

use std::path::Path;

use crate::config::{Config, EnvironmentSpec};
use crate::hooks::HookContext;

use super::error::DeployError;
use super::state::Initialized;

/// A deployment in progress, parameterized by its current state.
#[derive(Debug)]
pub struct Deployment<'a, S> {
    pub(crate) config: &'a Config,
    pub(crate) environment: String,
    pub(crate) spec: &'a EnvironmentSpec,
    pub(crate) project_dir: &'a Path,
    pub(crate) state: S,
}

impl<'a> Deployment<'a, Initialized> {
    /// Resolve `environment` and start a deployment for it.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::UnknownEnvironment` listing every configured name.
    pub fn new(
        config: &'a Config,
        environment: &str,
        project_dir: &'a Path,
    ) -> Result<Self, DeployError> {
        let spec = config.resolve(environment)?;
        Ok(Deployment {
            config,
            environment: environment.to_string(),
            spec,
            project_dir,
            state: Initialized,
        })
    }
}

impl<'a, S> Deployment<'a, S> {
    /// Environment name as given on the command line.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn spec(&self) -> &'a EnvironmentSpec {
        self.spec
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    pub fn project_dir(&self) -> &'a Path {
        self.project_dir
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub(crate) fn hook_context(&self) -> HookContext {
        HookContext::new(&self.environment, self.spec)
    }

    pub(crate) fn transition<T>(self, state: T) -> Deployment<'a, T> {
        Deployment {
            config: self.config,
            environment: self.environment,
            spec: self.spec,
            project_dir: self.project_dir,
            state,
        }
    }
}
