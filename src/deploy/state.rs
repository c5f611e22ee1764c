// ABOUTME: Deployment state marker types for the type state pattern.
// ABOUTME: Each marker enables only the next pipeline stage at compile time.

use super::strategy::PublishStrategy;

/// Initial state: target environment resolved from the configuration.
/// Available actions: `validate()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// Validated: every required file exists.
/// Available actions: `run_pre_deploy_hooks()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Validated;

/// Prepared: all pre-deploy hooks succeeded.
/// Available actions: `publish()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Prepared;

/// Published: the strategy finished successfully.
/// Available actions: `health_check()`
#[derive(Debug, Clone, Copy)]
pub struct Published {
    pub(crate) strategy: PublishStrategy,
}

impl Published {
    pub fn strategy(&self) -> PublishStrategy {
        self.strategy
    }
}

/// Verified: health check ran (or was skipped). Never fails.
/// Available actions: `run_post_deploy_hooks()`
#[derive(Debug, Clone, Copy)]
pub struct Verified {
    pub(crate) strategy: PublishStrategy,
}

impl Verified {
    pub fn strategy(&self) -> PublishStrategy {
        self.strategy
    }
}

/// Completed: post-deploy hooks attempted.
#[derive(Debug, Clone, Copy)]
pub struct Completed {
    pub(crate) strategy: PublishStrategy,
}

impl Completed {
    pub fn strategy(&self) -> PublishStrategy {
        self.strategy
    }
}
