//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_agent;
pub mod run_ask;
pub mod run_check;
pub mod run_pipeline;
pub mod station_tools;
