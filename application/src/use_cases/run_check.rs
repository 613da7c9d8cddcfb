//! Run Check use case: one scheduled station check.
//!
//! Runs the agent, turns its outcome into user-facing text, delivers that
//! text and appends an interaction record. The user always receives either
//! the report or an explicit "could not complete" message.

use crate::ports::agent_progress::AgentProgressNotifier;
use crate::ports::clock::Clock;
use crate::ports::interaction_logger::{InteractionLogger, InteractionRecord};
use crate::ports::notifier::Notifier;
use crate::use_cases::run_agent::{RunAgentInput, RunAgentOutput, RunAgentUseCase};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Prefix of the text sent when the loop ends in error.
pub const CHECK_FAILED_PREFIX: &str = "Could not complete the air quality check";

#[derive(Debug)]
pub struct CheckOutcome {
    /// Text delivered to the notifier.
    pub text: String,
    pub notified: bool,
    pub run: RunAgentOutput,
    pub record: InteractionRecord,
}

pub struct RunCheckUseCase {
    agent: RunAgentUseCase,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn InteractionLogger>,
    clock: Arc<dyn Clock>,
}

impl RunCheckUseCase {
    pub fn new(
        agent: RunAgentUseCase,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn InteractionLogger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            agent,
            notifier,
            logger,
            clock,
        }
    }

    pub async fn execute(
        &self,
        input: RunAgentInput,
        progress: &dyn AgentProgressNotifier,
    ) -> CheckOutcome {
        let request = input.request.clone();
        let started = Instant::now();
        let run = self.agent.execute(input, progress).await;
        let latency = started.elapsed();

        let text = match (&run.answer, &run.error) {
            (Some(answer), _) => answer.clone(),
            (None, Some(error)) => format!("{CHECK_FAILED_PREFIX}: {error}"),
            (None, None) => format!("{CHECK_FAILED_PREFIX}: no answer"),
        };

        let notified = match self.notifier.notify(&text).await {
            Ok(()) => {
                info!("Report delivered via {}", self.notifier.channel());
                true
            }
            Err(e) => {
                warn!("Failed to deliver report via {}: {}", self.notifier.channel(), e);
                false
            }
        };

        let record = run.to_record(self.clock.now(), request, latency);
        self.logger.log(&record);

        CheckOutcome {
            text,
            notified,
            run,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExecutionParams, PipelineParams};
    use crate::ports::clock::FixedClock;
    use crate::ports::agent_progress::NoAgentProgress;
    use crate::ports::event_store::{EventStore, PersistenceError};
    use crate::ports::llm_gateway::{GatewayError, LlmGateway};
    use crate::ports::notifier::NotifyError;
    use crate::ports::telemetry_source::{AcquisitionError, TelemetrySource};
    use crate::ports::tool_schema::ToolSchemaPort;
    use crate::use_cases::run_pipeline::RunPipelineUseCase;
    use crate::use_cases::station_tools::StationToolExecutor;
    use airwatch_domain::{
        Conversation, DayOfWeek, EventId, LlmResponse, Message, NewEvent, Reading, RelevantEvent,
        ToolCall, ToolDefinition,
    };
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct EmptySource;

    #[async_trait]
    impl TelemetrySource for EmptySource {
        async fn fetch_window(
            &self,
            _since: DateTime<Utc>,
        ) -> Result<Vec<Reading>, AcquisitionError> {
            Ok(vec![])
        }
    }

    struct NoEvents;

    #[async_trait]
    impl EventStore for NoEvents {
        async fn similar_events(
            &self,
            _hour: u32,
            _day_of_week: DayOfWeek,
        ) -> Result<Vec<RelevantEvent>, PersistenceError> {
            Ok(vec![])
        }

        async fn save_event(&self, _event: NewEvent) -> Result<EventId, PersistenceError> {
            Err(PersistenceError::Io("read-only".to_string()))
        }
    }

    /// Calls the report tool once, then answers based on what came back.
    struct ReportingGateway {
        script: Mutex<VecDeque<LlmResponse>>,
        last_tool_output: Mutex<Option<String>>,
    }

    impl ReportingGateway {
        fn new() -> Self {
            Self {
                script: Mutex::new(VecDeque::from(vec![LlmResponse::from_tool_calls([
                    ToolCall::new("call_1", "get_air_quality_report", "{}"),
                ])])),
                last_tool_output: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for ReportingGateway {
        fn model_name(&self) -> &str {
            "reporting"
        }

        async fn complete(
            &self,
            conversation: &Conversation,
            _tools: &[serde_json::Value],
        ) -> Result<LlmResponse, GatewayError> {
            if let Some(response) = self.script.lock().unwrap().pop_front() {
                return Ok(response);
            }
            let tool_output = conversation.messages().iter().rev().find_map(|m| match m {
                Message::Tool { content, .. } => Some(content.clone()),
                _ => None,
            });
            *self.last_tool_output.lock().unwrap() = tool_output.clone();
            match tool_output {
                Some(content) if content.contains(r#""status":"error""#) => {
                    Ok(LlmResponse::from_text("No data available from the station right now."))
                }
                Some(_) => Ok(LlmResponse::from_text("Air quality is Good.")),
                None => Err(GatewayError::Other("no tool output".to_string())),
            }
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl LlmGateway for FailingGateway {
        fn model_name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _conversation: &Conversation,
            _tools: &[serde_json::Value],
        ) -> Result<LlmResponse, GatewayError> {
            Err(GatewayError::ConnectionError("dns failure".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        fn channel(&self) -> &str {
            "test"
        }

        async fn notify(&self, text: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Delivery("bot blocked".to_string()));
            }
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        records: Mutex<Vec<InteractionRecord>>,
    }

    impl InteractionLogger for RecordingLogger {
        fn log(&self, record: &InteractionRecord) {
            self.records.lock().unwrap().push(record.clone());
        }
    }

    struct PlainSchema;

    impl ToolSchemaPort for PlainSchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            serde_json::json!({ "name": tool.name })
        }
    }

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 2, 20, 0, 0).unwrap()))
    }

    fn check(
        gateway: Arc<dyn LlmGateway>,
        notifier: Arc<RecordingNotifier>,
        logger: Arc<RecordingLogger>,
    ) -> RunCheckUseCase {
        let pipeline = RunPipelineUseCase::new(Arc::new(EmptySource), PipelineParams::default());
        let tools = StationToolExecutor::new(pipeline, Arc::new(NoEvents), clock());
        let agent = RunAgentUseCase::new(gateway, Arc::new(tools), Arc::new(PlainSchema));
        RunCheckUseCase::new(agent, notifier, logger, clock())
    }

    #[tokio::test]
    async fn test_empty_station_still_produces_answer() {
        let gateway = Arc::new(ReportingGateway::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let logger = Arc::new(RecordingLogger::default());

        let outcome = check(gateway.clone(), notifier.clone(), logger.clone())
            .execute(
                RunAgentInput::new("Estado de la estación", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        let tool_output = gateway.last_tool_output.lock().unwrap().clone().unwrap();
        let tool_json: serde_json::Value = serde_json::from_str(&tool_output).unwrap();
        assert_eq!(tool_json["status"], "error");

        assert!(outcome.run.is_ok());
        assert_eq!(outcome.text, "No data available from the station right now.");
        assert!(outcome.notified);
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);

        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].error.is_none());
        assert!(records[0].response_generated);
        assert_eq!(records[0].tools_called, vec!["get_air_quality_report"]);
        assert_eq!(records[0].user_message, "Estado de la estación");
    }

    #[tokio::test]
    async fn test_loop_failure_sends_explicit_message() {
        let notifier = Arc::new(RecordingNotifier::default());
        let logger = Arc::new(RecordingLogger::default());

        let outcome = check(Arc::new(FailingGateway), notifier.clone(), logger.clone())
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert!(!outcome.run.is_ok());
        assert!(outcome.text.starts_with("Could not complete the air quality check: "));
        assert!(outcome.text.contains("dns failure"));
        assert_eq!(notifier.sent.lock().unwrap().as_slice(), &[outcome.text.clone()]);

        let records = logger.records.lock().unwrap();
        assert!(!records[0].response_generated);
        assert!(records[0].error.as_deref().unwrap().contains("dns failure"));
    }

    #[tokio::test]
    async fn test_notify_failure_does_not_change_outcome() {
        let notifier = Arc::new(RecordingNotifier {
            fail: true,
            ..Default::default()
        });
        let logger = Arc::new(RecordingLogger::default());

        let outcome = check(Arc::new(ReportingGateway::new()), notifier, logger.clone())
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert!(outcome.run.is_ok());
        assert!(!outcome.notified);
        assert_eq!(logger.records.lock().unwrap().len(), 1);
        assert!(outcome.record.error.is_none());
    }
}
