//! HTTP client for the QA webhook.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::RunnerConfig;
use crate::error::{ConfigError, WebhookError, WebhookResult};
use crate::model::TranscriptRecord;

/// User agent for webhook requests.
pub const USER_AGENT_VALUE: &str = concat!("torture/", env!("CARGO_PKG_VERSION"));

/// Posts records to the webhook and returns the decoded JSON reply.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: Url,
}

impl WebhookClient {
    /// Create a client for the configured webhook.
    pub fn new(config: &RunnerConfig) -> Result<Self, ConfigError> {
        let url = config.webhook_url()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            message: e.to_string(),
        })?;

        Ok(Self { client, url })
    }

    /// POST `record` as JSON. Succeeds only on status 200 with a JSON body.
    pub async fn post_record(&self, record: &TranscriptRecord) -> WebhookResult<Value> {
        debug!(url = %self.url, filename = %record.filename, "posting record");

        let response = self
            .client
            .post(self.url.clone())
            .json(record)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "webhook request failed"))?;

        let status = response.status();
        debug!(status = status.as_u16(), "webhook responded");

        let body = response.text().await.map_err(|e| WebhookError::Network {
            message: format!("failed to read response body: {}", e),
        })?;

        if status != StatusCode::OK {
            return Err(WebhookError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| WebhookError::InvalidResponse {
            message: format!("failed to parse webhook response as JSON: {}", e),
        })
    }

    /// The webhook URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}
