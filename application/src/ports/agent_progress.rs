//! Agent execution progress port.
//!
//! [`AgentProgressNotifier`] is an **output port** that the presentation layer
//! implements to show loop progress. All methods default to no-ops, so
//! implementers only override the callbacks they care about.

use crate::use_cases::run_agent::LoopState;
use airwatch_domain::{ToolCall, ToolResult};

pub trait AgentProgressNotifier: Send + Sync {
    /// Called on every state machine transition
    fn on_state_change(&self, _state: LoopState) {}

    /// Called before each reasoning-service request
    fn on_model_request(&self, _round: usize) {}

    /// Called with any text the model produced alongside its reply
    fn on_model_text(&self, _text: &str) {}

    /// Called when a tool call is about to run
    fn on_tool_call(&self, _round: usize, _call: &ToolCall) {}

    /// Called when a tool call has produced its result
    fn on_tool_result(&self, _round: usize, _call: &ToolCall, _result: &ToolResult) {}
}

/// No-op implementation
pub struct NoAgentProgress;

impl AgentProgressNotifier for NoAgentProgress {}
