// ABOUTME: Post-deploy health check configuration.
// ABOUTME: Defines the probed endpoint path and request timeout with defaults.

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_HEALTH_ENDPOINT: &str = "/api/keep_alive";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub health_check: HealthcheckConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthcheckConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for HealthcheckConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
        }
    }
}

impl HealthcheckConfig {
    /// URL probed for an environment served at `domain`.
    pub fn url_for(&self, domain: &str) -> String {
        if self.endpoint.starts_with('/') {
            format!("https://{}{}", domain, self.endpoint)
        } else {
            format!("https://{}/{}", domain, self.endpoint)
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_HEALTH_ENDPOINT.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}
