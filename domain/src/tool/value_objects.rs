//! Tool result and error types.
//!
//! Every dispatched tool call produces exactly one [`ToolResult`]. Failures
//! are data: the loop serializes them into the conversation so the model can
//! correct itself, and never aborts on them.

use super::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// Structured error returned to the model in place of tool output.
///
/// | Code | Raised when |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Arguments are malformed, missing, unknown or out of range |
/// | `NOT_FOUND` | The model named a tool outside the active registry |
/// | `EXECUTION_FAILED` | The tool ran but a port behind it failed |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub const INVALID_ARGUMENT: &'static str = "INVALID_ARGUMENT";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const EXECUTION_FAILED: &'static str = "EXECUTION_FAILED";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn unknown_tool(name: impl AsRef<str>) -> Self {
        Self::new(
            Self::NOT_FOUND,
            format!("Unknown tool: {}", name.as_ref()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_ARGUMENT, message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(Self::EXECUTION_FAILED, message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Outcome of one tool call.
///
/// `output` carries the serialized JSON payload on success; `error` carries
/// the structured failure otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Wall-clock execution time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Content appended to the conversation as the tool message.
    ///
    /// Failures are rendered as `{"error": {...}}` so the model sees the code.
    pub fn to_message_content(&self) -> String {
        if let Some(output) = &self.output
            && self.success
        {
            return output.clone();
        }
        let error = self
            .error
            .clone()
            .unwrap_or_else(|| ToolError::execution_failed("Tool produced no output"));
        serde_json::json!({ "error": error }).to_string()
    }
}

/// One executed tool call in a run's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Tool round the call belongs to, starting at 1
    pub round: usize,
    pub call_id: String,
    pub tool_name: String,
    /// Raw JSON arguments as sent by the model
    pub arguments: String,
    pub success: bool,
    /// Content appended to the conversation for this call
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolInvocation {
    pub fn new(round: usize, call: &ToolCall, result: &ToolResult) -> Self {
        Self {
            round,
            call_id: call.id.clone(),
            tool_name: call.tool_name.clone(),
            arguments: call.arguments.clone(),
            success: result.is_success(),
            output: result.to_message_content(),
            duration_ms: result.metadata.duration_ms,
        }
    }
}
