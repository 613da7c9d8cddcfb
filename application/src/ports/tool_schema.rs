//! Tool schema conversion port.
//!
//! Separates "which tools to offer" (domain [`ToolSpec`]) from "how to
//! serialize them for the reasoning API" (infrastructure).

use airwatch_domain::tool::entities::{ToolDefinition, ToolSpec};

pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to the API's function schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert every offered tool, in registry order.
    fn tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.definitions()
            .iter()
            .map(|t| self.tool_to_schema(t))
            .collect()
    }
}
