//! Execution parameters: orchestration loop control.
//!
//! [`ExecutionParams`] groups the static parameters that bound the loop in
//! [`RunAgentUseCase`](crate::use_cases::run_agent::RunAgentUseCase).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum tool rounds per run. The model is consulted at most
    /// `max_tool_turns + 1` times.
    pub max_tool_turns: usize,
    /// Upper bound for a single reasoning-service call.
    pub model_timeout: Option<Duration>,
    /// Run a round concurrently when every call is read-only and names a
    /// distinct tool.
    pub parallel_read_only: bool,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_tool_turns: 8,
            model_timeout: Some(Duration::from_secs(60)),
            parallel_read_only: true,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }

    pub fn with_model_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.model_timeout = timeout;
        self
    }

    pub fn with_parallel_read_only(mut self, enabled: bool) -> Self {
        self.parallel_read_only = enabled;
        self
    }
}
