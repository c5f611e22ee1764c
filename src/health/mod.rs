// ABOUTME: HTTP health probe for deployed environments.
// ABOUTME: One bounded GET per check, classified as healthy, bad status, or failed.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::error::Result;

/// Classification of a single health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The endpoint answered 200.
    Healthy { status: u16 },
    /// The endpoint answered with any other status.
    BadStatus { status: u16 },
    /// No response: timeout, DNS, refused connection, TLS, etc.
    RequestFailed { reason: String },
}

impl ProbeResult {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeResult::Healthy { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeResult::Healthy { status } | ProbeResult::BadStatus { status } => Some(*status),
            ProbeResult::RequestFailed { .. } => None,
        }
    }

    pub fn from_status(status: u16) -> Self {
        if status == 200 {
            ProbeResult::Healthy { status }
        } else {
            ProbeResult::BadStatus { status }
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeResult::Healthy { status } => write!(f, "healthy ({status})"),
            ProbeResult::BadStatus { status } => write!(f, "returned {status}"),
            ProbeResult::RequestFailed { reason } => write!(f, "request failed: {reason}"),
        }
    }
}

/// Checks whether a deployed URL responds.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self, url: &str) -> ProbeResult;
}

/// Probe backed by a reqwest client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn check(&self, url: &str) -> ProbeResult {
        tracing::debug!(url, timeout_secs = self.timeout.as_secs(), "probing");

        match self.client.get(url).send().await {
            Ok(response) => {
                let result = ProbeResult::from_status(response.status().as_u16());
                tracing::debug!(url, %result, "probe finished");
                result
            }
            Err(e) => ProbeResult::RequestFailed {
                reason: e.to_string(),
            },
        }
    }
}
