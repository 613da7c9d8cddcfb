//! Domain layer for airwatch
//!
//! Pure business logic for an air-quality station agent. No I/O: every
//! function here is deterministic given its inputs.
//!
//! # Core Concepts
//!
//! ## Windowed aggregation
//!
//! Raw long-format [`Reading`]s from one time window are grouped per sensor
//! into [`SensorSummary`] records ([`telemetry`]), then classified into
//! anomaly flags, device health and AQI levels ([`classify`]). The result of
//! one pass is a [`StationSnapshot`] wrapped in a [`PipelineOutcome`].
//!
//! ## Tool orchestration
//!
//! The reasoning service sees a closed registry of tools ([`ToolKind`]).
//! Its calls are decoded into typed [`ToolRequest`]s, answered with
//! [`ToolResult`]s and recorded in an append-only [`Conversation`].
//!
//! ## Relevant events
//!
//! Noteworthy conditions are persisted as [`RelevantEvent`]s keyed by
//! [`TimeSlot`] and summarized per sensor into [`SensorBaseline`]s.

pub mod classify;
pub mod event;
pub mod prompt;
pub mod report;
pub mod session;
pub mod telemetry;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use classify::{
    AnomalyFlag, AnomalyKind, AqiAssessment, AqiLevel, DeviceHealthStatus, DeviceReadings,
    HealthStatus, HealthThresholds, PollutantLevel, assess_aqi, detect_anomalies,
    evaluate_device_health,
};
pub use event::{
    DayOfWeek, EventId, EventMeasurements, NewEvent, RelevantEvent, SensorBaseline, TimeSlot,
};
pub use prompt::{AgentPromptTemplate, DEFAULT_SCHEDULED_REQUEST};
pub use report::{AirQualityReport, NO_DATA_MESSAGE, PipelineOutcome, StationSnapshot};
pub use session::{
    entities::{Conversation, Message, Role},
    response::{ContentBlock, LlmResponse, StopReason},
};
pub use telemetry::{AggregationError, Reading, SampleStats, SensorSummary, aggregate};
pub use tool::{
    AirQualityReportRequest, HistoricalContextRequest, SaveEventRequest, SideEffect, ToolCall,
    ToolDefinition, ToolError, ToolInvocation, ToolKind, ToolParameter, ToolRequest, ToolResult,
    ToolResultMetadata, ToolSpec,
};
