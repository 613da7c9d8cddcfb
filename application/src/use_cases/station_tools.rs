//! Station tool executor.
//!
//! Resolves model-issued [`ToolCall`]s against the closed registry, decodes
//! their arguments and runs them against the pipeline and the event store.
//! Every failure is returned as an unsuccessful [`ToolResult`]; nothing here
//! aborts a run.

use crate::ports::clock::Clock;
use crate::ports::event_store::EventStore;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::run_pipeline::RunPipelineUseCase;
use airwatch_domain::event::BASELINE_SENSORS;
use airwatch_domain::{
    AirQualityReport, AirQualityReportRequest, HistoricalContextRequest, NewEvent,
    PipelineOutcome, SaveEventRequest, SensorBaseline, TimeSlot, ToolCall, ToolError, ToolRequest,
    ToolResult, ToolSpec,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Payload of `get_historical_context`.
#[derive(Debug, Serialize)]
struct HistoricalContext {
    day_of_week: String,
    hour: u32,
    event_count: usize,
    similar_events: Vec<airwatch_domain::RelevantEvent>,
    baselines: Vec<SensorBaseline>,
}

pub struct StationToolExecutor {
    spec: ToolSpec,
    pipeline: RunPipelineUseCase,
    events: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl StationToolExecutor {
    /// Executor offering the full registry.
    pub fn new(
        pipeline: RunPipelineUseCase,
        events: Arc<dyn EventStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            spec: ToolSpec::full(),
            pipeline,
            events,
            clock,
        }
    }

    /// Restrict the offered tools. Calls to tools outside that set are
    /// answered with `NOT_FOUND`.
    pub fn with_spec(mut self, spec: ToolSpec) -> Self {
        self.spec = spec;
        self
    }

    fn current_slot(&self, now: DateTime<Utc>) -> TimeSlot {
        TimeSlot::at(now, self.pipeline.params().station_offset)
    }

    async fn run(&self, request: ToolRequest) -> Result<String, ToolError> {
        match request {
            ToolRequest::AirQualityReport(req) => self.air_quality_report(req).await,
            ToolRequest::HistoricalContext(req) => self.historical_context(req).await,
            ToolRequest::SaveRelevantEvent(req) => self.save_event(req).await,
        }
    }

    async fn air_quality_report(&self, req: AirQualityReportRequest) -> Result<String, ToolError> {
        let outcome = self.pipeline.execute(self.clock.now()).await;
        match &outcome {
            PipelineOutcome::Ok(snapshot) => {
                let report = AirQualityReport::from_snapshot(snapshot, req.include_raw_metrics)
                    .with_local_time(self.current_slot(snapshot.timestamp));
                to_json(&report)
            }
            // The error outcome is data for the model, not a tool failure.
            PipelineOutcome::Error { .. } => to_json(&outcome),
        }
    }

    async fn historical_context(&self, req: HistoricalContextRequest) -> Result<String, ToolError> {
        let current = self.current_slot(self.clock.now());
        let hour = req.hour.unwrap_or(current.hour);
        let slot = TimeSlot::new(req.day_of_week.unwrap_or(current.day_of_week), hour)
            .ok_or_else(|| ToolError::invalid_argument(format!("Invalid hour: {}", hour)))?;

        let similar_events = self
            .events
            .similar_events(slot.hour, slot.day_of_week)
            .await
            .map_err(|e| {
                warn!("Historical lookup failed: {}", e);
                ToolError::execution_failed("Event store unavailable").with_details(e.to_string())
            })?;

        let baselines: Vec<SensorBaseline> = match &req.sensor_id {
            Some(sensor_id) => self
                .events
                .baseline(slot.day_of_week, slot.hour, sensor_id)
                .await
                .map_err(|e| {
                    warn!("Baseline lookup failed: {}", e);
                    ToolError::execution_failed("Event store unavailable")
                        .with_details(e.to_string())
                })?
                .into_iter()
                .collect(),
            None => BASELINE_SENSORS
                .iter()
                .filter_map(|sensor| SensorBaseline::from_events(&similar_events, slot, sensor))
                .collect(),
        };

        debug!(
            "Historical context for {} {:02}:00: {} events, {} baselines",
            slot.day_of_week,
            slot.hour,
            similar_events.len(),
            baselines.len()
        );

        to_json(&HistoricalContext {
            day_of_week: slot.day_of_week.to_string(),
            hour: slot.hour,
            event_count: similar_events.len(),
            similar_events,
            baselines,
        })
    }

    async fn save_event(&self, req: SaveEventRequest) -> Result<String, ToolError> {
        let now = self.clock.now();
        let current = self.current_slot(now);
        let slot = TimeSlot {
            day_of_week: req.day_of_week.unwrap_or(current.day_of_week),
            hour: req.hour.unwrap_or(current.hour),
        };

        let event = NewEvent {
            timestamp: now,
            slot,
            measurements: req.measurements(),
            trigger: req.trigger,
            pattern_match: req.pattern_match,
            agent_notes: req.agent_notes,
        };

        let event_id = self.events.save_event(event).await.map_err(|e| {
            warn!("Failed to persist relevant event: {}", e);
            ToolError::execution_failed("Could not save event").with_details(e.to_string())
        })?;

        info!(
            "Saved relevant event {} for {} {:02}:00",
            event_id, slot.day_of_week, slot.hour
        );

        to_json(&serde_json::json!({
            "status": "saved",
            "event_id": event_id,
            "day_of_week": slot.day_of_week,
            "hour": slot.hour,
        }))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string(value)
        .map_err(|e| ToolError::execution_failed("Could not encode tool output").with_details(e.to_string()))
}

#[async_trait]
impl ToolExecutorPort for StationToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();

        let Some(kind) = call.kind().filter(|k| self.spec.contains(*k)) else {
            warn!("Model requested unknown tool '{}'", call.tool_name);
            return ToolResult::failure(&call.tool_name, ToolError::unknown_tool(&call.tool_name));
        };

        let request = match ToolRequest::decode(kind, &call.arguments) {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected arguments for {}: {}", call.tool_name, e);
                return ToolResult::failure(&call.tool_name, e);
            }
        };

        let result = match self.run(request).await {
            Ok(output) => ToolResult::success(kind.name(), output),
            Err(e) => ToolResult::failure(kind.name(), e),
        };
        result.with_duration(started.elapsed().as_millis() as u64)
    }
}
