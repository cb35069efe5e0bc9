//! Webhook client wrapping `reqwest` with triage-specific error handling.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::N8nError;

/// Client for the n8n analysis webhook.
///
/// Holds the HTTP client and the fixed webhook URL. Construct with
/// [`N8nClient::new`]; point it at a wiremock server in tests.
#[derive(Debug)]
pub struct N8nClient {
    client: Client,
    webhook_url: Url,
}

impl N8nClient {
    /// Creates a client for the given webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`N8nError::InvalidUrl`] if `webhook_url` does not parse, or
    /// [`N8nError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(webhook_url: &str, timeout_secs: u64) -> Result<Self, N8nError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("triage/0.1 (support-ticket-analysis)")
            .build()?;

        let webhook_url = Url::parse(webhook_url).map_err(|e| N8nError::InvalidUrl {
            url: webhook_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Sends one ticket to the workflow and returns the decoded response.
    ///
    /// The body is `{"message": {"content": <message>, "source": <source>}}`.
    /// A single call, no retry; the returned [`Value`] is whatever shape the
    /// workflow answered with (object, array, or anything else).
    ///
    /// # Errors
    ///
    /// - [`N8nError::Http`] on network failure or a non-2xx status.
    /// - [`N8nError::Deserialize`] if the body is not valid JSON.
    pub async fn dispatch(&self, source: &str, message: &str) -> Result<Value, N8nError> {
        let payload = serde_json::json!({
            "message": {
                "content": message,
                "source": source,
            }
        });

        tracing::debug!(url = %self.webhook_url, source, "dispatching ticket to n8n");

        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(&payload)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%status, bytes = body.len(), "n8n responded");

        serde_json::from_str(&body).map_err(|e| N8nError::Deserialize {
            context: self.webhook_url.to_string(),
            source: e,
        })
    }
}
