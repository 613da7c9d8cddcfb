//! Reasoning service response types.
//!
//! A reply is a list of content blocks: free text and tool-call requests.
//! The loop dispatches [`LlmResponse::tool_calls`] when there are any and
//! otherwise finishes with [`LlmResponse::text_content`].

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// A single block of content within a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),

    /// A tool call request. `arguments` is the raw JSON string from the
    /// service; decoding happens at dispatch time.
    ToolUse {
        id: String,
        name: String,
        arguments: String,
    },
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response.
    EndTurn,
    /// The model wants tool results before continuing.
    ToolUse,
    /// Hit the token limit; the text may be truncated.
    MaxTokens,
    Other(String),
}

impl StopReason {
    /// Map an OpenAI-style `finish_reason`.
    pub fn from_finish_reason(reason: &str) -> Self {
        match reason {
            "stop" => StopReason::EndTurn,
            "tool_calls" | "function_call" => StopReason::ToolUse,
            "length" => StopReason::MaxTokens,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// A structured response from the reasoning service.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    /// Model identifier, when returned by the API
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Create a response requesting the given tool calls.
    pub fn from_tool_calls(calls: impl IntoIterator<Item = ToolCall>) -> Self {
        Self {
            content: calls
                .into_iter()
                .map(|c| ContentBlock::ToolUse {
                    id: c.id,
                    name: c.tool_name,
                    arguments: c.arguments,
                })
                .collect(),
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        }
    }

    /// Concatenate all text blocks.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse {
                    id,
                    name,
                    arguments,
                } => Some(ToolCall::new(id, name, arguments)),
                _ => None,
            })
            .collect()
    }

    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_creates_text_only_response() {
        let response = LlmResponse::from_text("Air quality is Good.");
        assert_eq!(response.text_content(), "Air quality is Good.");
        assert!(!response.has_tool_calls());
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn tool_calls_extraction_preserves_order() {
        let response = LlmResponse {
            content: vec![
                ContentBlock::Text("Checking the station.".to_string()),
                ContentBlock::ToolUse {
                    id: "call_a".to_string(),
                    name: "get_air_quality_report".to_string(),
                    arguments: r#"{"include_raw_metrics":true}"#.to_string(),
                },
                ContentBlock::ToolUse {
                    id: "call_b".to_string(),
                    name: "get_historical_context".to_string(),
                    arguments: r#"{"hour":14,"day_of_week":"Monday"}"#.to_string(),
                },
            ],
            stop_reason: Some(StopReason::ToolUse),
            model: Some("llama-3.3-70b-versatile".to_string()),
        };

        assert!(response.has_tool_calls());
        assert_eq!(response.text_content(), "Checking the station.");
        let calls = response.tool_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].id, "call_a");
        assert_eq!(calls[1].tool_name, "get_historical_context");
    }

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(StopReason::from_finish_reason("stop"), StopReason::EndTurn);
        assert_eq!(StopReason::from_finish_reason("tool_calls"), StopReason::ToolUse);
        assert_eq!(StopReason::from_finish_reason("length"), StopReason::MaxTokens);
        assert_eq!(
            StopReason::from_finish_reason("content_filter"),
            StopReason::Other("content_filter".to_string())
        );
    }
}
