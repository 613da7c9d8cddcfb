//! OpenAI-compatible reasoning gateway
//!
//! One `POST {base_url}/chat/completions` per call. The gateway is stateless:
//! the loop sends the whole conversation every time.

use super::types::{ChatRequest, ChatResponse, error_message};
use crate::config::FileReasoningConfig;
use airwatch_application::ports::llm_gateway::{GatewayError, LlmGateway};
use airwatch_domain::{Conversation, LlmResponse};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct ReasoningEndpoint {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    /// HTTP-level timeout; the loop applies its own per-call bound too
    pub timeout: Duration,
}

impl From<&FileReasoningConfig> for ReasoningEndpoint {
    fn from(config: &FileReasoningConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout(),
        }
    }
}

pub struct OpenAiCompatibleGateway {
    client: reqwest::Client,
    endpoint: ReasoningEndpoint,
}

impl OpenAiCompatibleGateway {
    /// Build the gateway. Fails early when no API key is available.
    pub fn new(endpoint: ReasoningEndpoint) -> Result<Self, GatewayError> {
        if endpoint
            .api_key
            .as_deref()
            .is_none_or(|k| k.trim().is_empty())
        {
            return Err(GatewayError::MissingApiKey(endpoint.base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(endpoint.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.endpoint.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    fn model_name(&self) -> &str {
        &self.endpoint.model
    }

    async fn complete(
        &self,
        conversation: &Conversation,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        let request = ChatRequest::new(
            &self.endpoint.model,
            conversation,
            tools,
            self.endpoint.max_tokens,
        );
        debug!(
            "Requesting {} ({} messages, {} tools)",
            self.endpoint.model,
            request.messages.len(),
            tools.len()
        );

        let mut builder = self.client.post(self.completions_url()).json(&request);
        if let Some(key) = &self.endpoint.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::ConnectionError(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            warn!("Reasoning service returned {}", status);
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body: error_message(&body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        let response = parsed.into_domain()?;

        debug!(
            "Reasoning response: {} tool calls, stop reason {:?}",
            response.tool_calls().len(),
            response.stop_reason
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(api_key: Option<&str>) -> ReasoningEndpoint {
        ReasoningEndpoint {
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key: api_key.map(str::to_string),
            max_tokens: 1024,
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_missing_api_key() {
        assert!(matches!(
            OpenAiCompatibleGateway::new(endpoint(None)),
            Err(GatewayError::MissingApiKey(_))
        ));
        assert!(matches!(
            OpenAiCompatibleGateway::new(endpoint(Some(" "))),
            Err(GatewayError::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_completions_url_trims_slash() {
        let gateway = OpenAiCompatibleGateway::new(endpoint(Some("gsk_test"))).unwrap();
        assert_eq!(
            gateway.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(gateway.model_name(), "llama-3.3-70b-versatile");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let gateway = OpenAiCompatibleGateway::new(ReasoningEndpoint {
            base_url: "http://127.0.0.1:9/v1".to_string(),
            ..endpoint(Some("gsk_test"))
        })
        .unwrap();
        let conversation = Conversation::seeded("sys", "hi");
        let err = gateway.complete(&conversation, &[]).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ConnectionError(_) | GatewayError::Timeout
        ));
    }
}
