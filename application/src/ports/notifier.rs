//! Notifier port
//!
//! Delivers the final report text to a human channel. Delivery is best
//! effort: callers log failures and never retry.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notifier not configured: {0}")]
    NotConfigured(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Channel rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short channel name for logs (e.g. "telegram").
    fn channel(&self) -> &str;

    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}
