//! Reasoning service configuration from TOML (`[reasoning]` section)

use airwatch_application::ExecutionParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_REASONING_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Raw reasoning configuration from TOML
///
/// Any OpenAI-compatible chat completions endpoint works.
///
/// # Example
///
/// ```toml
/// [reasoning]
/// base_url = "https://api.groq.com/openai/v1"
/// model = "llama-3.3-70b-versatile"
/// max_tool_turns = 8
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReasoningConfig {
    pub base_url: String,
    pub model: String,
    /// Bearer key. Falls back to `GROQ_API_KEY` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub max_tokens: u32,
    /// Upper bound for one reasoning call, in seconds
    pub timeout_secs: u64,
    /// Tool rounds per run
    pub max_tool_turns: usize,
    /// Run read-only rounds concurrently
    pub parallel_read_only: bool,
}

impl Default for FileReasoningConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REASONING_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: 1024,
            timeout_secs: 60,
            max_tool_turns: 8,
            parallel_read_only: true,
        }
    }
}

impl FileReasoningConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_tool_turns(self.max_tool_turns)
            .with_model_timeout(Some(self.timeout()))
            .with_parallel_read_only(self.parallel_read_only)
    }
}
