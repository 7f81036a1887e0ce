//! Webhook delivery of completed forms

mod client;
mod traits;

pub use client::{WebhookClient, DEFAULT_WEBHOOK_URL};
pub use traits::{SubmitError, WebhookClientTrait};

#[cfg(test)]
pub use traits::MockWebhookClientTrait;
