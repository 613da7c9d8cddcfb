//! LLM Gateway port
//!
//! Defines the interface for communicating with the reasoning service.

use airwatch_domain::{Conversation, LlmResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key for {0}")]
    MissingApiKey(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for the reasoning service
///
/// One call sends the whole conversation plus the tool schema and returns
/// either terminal text or requested tool calls. Implementations hold no
/// conversation state; the loop owns the [`Conversation`].
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model identifier used for requests
    fn model_name(&self) -> &str;

    async fn complete(
        &self,
        conversation: &Conversation,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError>;
}
