//! Application-level configuration.
//!
//! - [`ExecutionParams`]: orchestration loop control (round budget, model timeout)
//! - [`PipelineParams`]: aggregation window, clock skew and health thresholds

pub mod execution_params;
pub mod pipeline_params;

pub use execution_params::ExecutionParams;
pub use pipeline_params::PipelineParams;
