//! Trait abstraction for the webhook client to enable mocking in tests

use crate::schema::Submission;
use async_trait::async_trait;
use thiserror::Error;

/// Why a submission did not reach the webhook
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to reach webhook: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded with status {0}")]
    Status(u16),
    #[error("submission task ended without a result")]
    Aborted,
}

/// Delivers one validated submission per call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookClientTrait: Send + Sync {
    /// POST the submission as JSON. Any non-2xx status is an error.
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}
