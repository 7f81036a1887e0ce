//! HTTP client for posting submissions to the webhook endpoint

use super::traits::{SubmitError, WebhookClientTrait};
use crate::schema::Submission;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Default webhook endpoint
pub const DEFAULT_WEBHOOK_URL: &str = "https://desarrollos-intezia-n8n.uh1aur.easypanel.host/webhook/401addbf-3478-42e8-948f-6fddd7a23d3a";

/// Client that posts submissions to a fixed endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    /// Create a client for `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WebhookClientTrait for WebhookClient {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let body = serde_json::to_vec(submission)?;

        tracing::info!(
            endpoint = %self.endpoint,
            variant = submission.variant().name(),
            bytes = body.len(),
            "Posting submission"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Webhook request failed: {e}");
                SubmitError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Webhook rejected submission");
            return Err(SubmitError::Status(status.as_u16()));
        }

        tracing::info!(status = status.as_u16(), "Submission delivered");
        Ok(())
    }
}
