// ABOUTME: Deployment orchestration using the type state pattern.
// ABOUTME: Exports state markers, strategies, and the orchestrator for one-environment deploys.

mod deployment;
mod error;
mod hosted;
mod local;
mod orchestrator;
mod outcome;
mod state;
mod strategy;
mod transitions;

pub use deployment::Deployment;
pub use error::{DeployError, DeployErrorKind};
pub use hosted::{PRODUCTION_FLAG, publish_command_line};
pub use orchestrator::Orchestrator;
pub use outcome::{DeploymentOutcome, Stage};
pub use state::{Completed, Initialized, Prepared, Published, Validated, Verified};
pub use strategy::{PublishContext, PublishStrategy};
