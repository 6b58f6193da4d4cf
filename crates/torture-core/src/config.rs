//! Runner configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// Webhook the QA workflow listens on.
pub const DEFAULT_WEBHOOK_URL: &str = "https://qaoneorigin.app.n8n.cloud/webhook/testairr";

/// Runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Webhook URL every case is posted to.
    #[serde(default = "default_webhook_url")]
    pub url: String,

    /// Request timeout in seconds. `None` leaves the transport default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            timeout_secs: None,
        }
    }
}

impl RunnerConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `TORTURE_WEBHOOK_URL` | Webhook URL |
    /// | `TORTURE_TIMEOUT_SECS` | Request timeout in seconds |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: lookup("TORTURE_WEBHOOK_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(default_webhook_url),
            timeout_secs: lookup("TORTURE_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Set the webhook URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Parse and check the webhook URL (absolute, http or https).
    pub fn webhook_url(&self) -> ConfigResult<Url> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.url.clone(),
            reason,
        };
        let url = Url::parse(&self.url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {:?}", other))),
        }
    }
}
