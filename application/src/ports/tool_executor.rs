//! Tool Executor port
//!
//! Defines the interface for executing registry tools.

use airwatch_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::ToolResult,
};
use async_trait::async_trait;

/// Port for tool execution
///
/// `execute` never fails: unknown tools, bad arguments and port failures
/// all come back as an unsuccessful [`ToolResult`].
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// The tools this executor offers
    fn tool_spec(&self) -> &ToolSpec;

    /// Get names of all available tools
    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
