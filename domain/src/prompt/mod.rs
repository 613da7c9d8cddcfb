//! Prompt domain
//!
//! System instructions and canned requests for the station agent.

pub mod agent;

pub use agent::{AgentPromptTemplate, DEFAULT_SCHEDULED_REQUEST};
