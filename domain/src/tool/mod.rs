//! Tool domain module
//!
//! This module defines the closed **Tool Registry** the reasoning service can
//! call during an agent run: which tools exist, what arguments they take,
//! and whether they change persisted state.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐  from_name()  ┌──────────────┐  decode()  ┌──────────────┐  execute  ┌──────────────┐
//! │ ToolCall     │──────────────▶│ ToolKind     │───────────▶│ ToolRequest  │──────────▶│ ToolResult   │
//! │ (raw JSON)   │               │ (closed enum)│            │ (typed args) │           │ (output)     │
//! └──────────────┘               └──────────────┘            └──────────────┘           └──────────────┘
//! ```
//!
//! Unknown tool names and malformed arguments never abort a run: they become
//! a [`ToolError`] that is sent back to the model as the tool result, so the
//! model can correct itself on the next turn.
//!
//! # Side Effects
//!
//! | Tool | Side effect |
//! |------|-------------|
//! | `get_air_quality_report` | read-only |
//! | `get_historical_context` | read-only |
//! | `save_relevant_event` | mutating (appends to the event store) |
//!
//! # Key Types
//!
//! - [`ToolKind`]: the closed set of tools, each with its [`ToolDefinition`]
//! - [`ToolSpec`]: the subset of tools offered in one run
//! - [`ToolCall`]: a model-issued invocation with raw JSON arguments
//! - [`ToolRequest`]: decoded, typed per-tool arguments
//! - [`ToolResult`]: execution outcome returned to the conversation

pub mod entities;
pub mod requests;
pub mod value_objects;

pub use entities::{SideEffect, ToolCall, ToolDefinition, ToolKind, ToolParameter, ToolSpec};
pub use requests::{
    AirQualityReportRequest, HistoricalContextRequest, SaveEventRequest, ToolRequest,
};
pub use value_objects::{ToolError, ToolInvocation, ToolResult, ToolResultMetadata};
