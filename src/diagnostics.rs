// ABOUTME: Diagnostics accumulator for non-fatal warnings during deployment.
// ABOUTME: Collects warnings that shouldn't fail a deployment but should be shown to users.

/// Collects non-fatal warnings during deployment operations.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal warning collected during deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a health check warning.
    pub fn health_check(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::HealthCheck,
            message: message.into(),
        }
    }

    /// Create a post-deploy hook warning.
    pub fn post_deploy_hook(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::PostDeployHook,
            message: message.into(),
        }
    }

    /// Create a development server exit warning.
    pub fn dev_server_exit(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DevServerExit,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Health probe got a non-200 answer, no answer, or had no domain to probe.
    HealthCheck,
    /// A post-deploy hook exited non-zero.
    PostDeployHook,
    /// The local development server exited with a non-zero code.
    DevServerExit,
}
