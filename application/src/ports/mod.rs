//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod agent_progress;
pub mod clock;
pub mod event_store;
pub mod interaction_logger;
pub mod llm_gateway;
pub mod notifier;
pub mod telemetry_source;
pub mod tool_executor;
pub mod tool_schema;
