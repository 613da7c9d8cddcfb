//! Port for the interaction (evaluation) log.
//!
//! One [`InteractionRecord`] per agent run, consumed later by scoring tools.
//! This is separate from `tracing` diagnostics: the record schema is a
//! stable, machine-readable contract.

use airwatch_domain::ToolInvocation;
use airwatch_domain::util::preview;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Characters of the final answer kept in `response_preview`.
pub const RESPONSE_PREVIEW_CHARS: usize = 200;

/// Scores filled in later by a human or a judge model; always `null` when
/// written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalScores {
    pub tool_called_correctly: Option<bool>,
    pub response_grounded: Option<bool>,
    pub hallucination_detected: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub timestamp: DateTime<Utc>,
    pub user_message: String,
    /// Tool names in invocation order
    pub tools_called: Vec<String>,
    #[serde(default)]
    pub tool_results: Vec<ToolInvocation>,
    pub response_generated: bool,
    pub response_preview: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    pub latency_ms: f64,
    /// Loop-level failure only; tool errors are part of `tool_results`
    pub error: Option<String>,
    pub eval_scores: EvalScores,
}

impl InteractionRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        user_message: impl Into<String>,
        tool_calls: &[ToolInvocation],
        response: Option<&str>,
        latency: Duration,
        error: Option<String>,
    ) -> Self {
        let latency_ms = (latency.as_secs_f64() * 1000.0 * 100.0).round() / 100.0;
        Self {
            timestamp,
            user_message: user_message.into(),
            tools_called: tool_calls.iter().map(|c| c.tool_name.clone()).collect(),
            tool_results: tool_calls.to_vec(),
            response_generated: response.is_some(),
            response_preview: response.map(|r| preview(r, RESPONSE_PREVIEW_CHARS)),
            response: response.map(str::to_string),
            latency_ms,
            error,
            eval_scores: EvalScores::default(),
        }
    }
}

/// Port for appending interaction records.
///
/// `log` is synchronous and non-fallible so a broken log never disrupts a
/// run; implementations report their own failures through `tracing`.
pub trait InteractionLogger: Send + Sync {
    fn log(&self, record: &InteractionRecord);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInteractionLogger;

impl InteractionLogger for NoInteractionLogger {
    fn log(&self, _record: &InteractionRecord) {}
}
