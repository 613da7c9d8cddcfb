//! Application layer for airwatch
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, PipelineParams};
pub use ports::{
    agent_progress::{AgentProgressNotifier, NoAgentProgress},
    clock::{Clock, FixedClock, SystemClock},
    event_store::{EventStore, PersistenceError},
    interaction_logger::{EvalScores, InteractionLogger, InteractionRecord, NoInteractionLogger},
    llm_gateway::{GatewayError, LlmGateway},
    notifier::{Notifier, NotifyError},
    telemetry_source::{AcquisitionError, TelemetrySource},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::run_agent::{
    LoopState, RunAgentError, RunAgentInput, RunAgentOutput, RunAgentUseCase,
};
pub use use_cases::run_ask::RunAskUseCase;
pub use use_cases::run_check::{CHECK_FAILED_PREFIX, CheckOutcome, RunCheckUseCase};
pub use use_cases::run_pipeline::RunPipelineUseCase;
pub use use_cases::station_tools::StationToolExecutor;
