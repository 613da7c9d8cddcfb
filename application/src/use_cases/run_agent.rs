//! Run Agent use case: the orchestration loop.
//!
//! Drives the reasoning service through bounded tool rounds until it
//! produces a final answer.
//!
//! # State machine
//!
//! ```text
//!                    ┌───────────────────────── tool calls ─────────────────────────┐
//!                    │                                                              ▼
//! seed ──▶ AwaitingModel ──── text, no calls ──▶ TerminatedOk            DispatchingTools
//!                    ▲                                                              │
//!                    └──────────────────── all results appended ◀──────────────────┘
//!
//! any state ──▶ TerminatedError  (gateway failure, timeout, empty answer, round budget)
//! ```
//!
//! The model is consulted at most `max_tool_turns + 1` times. Tool failures
//! are not loop failures: they go back to the model as tool messages. The
//! conversation and the audit trail are returned whatever the final state.

use crate::config::ExecutionParams;
use crate::ports::agent_progress::AgentProgressNotifier;
use crate::ports::interaction_logger::InteractionRecord;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use airwatch_domain::util::truncate_str;
use chrono::{DateTime, Utc};
use airwatch_domain::{
    AgentPromptTemplate, Conversation, LlmResponse, Message, ToolCall, ToolInvocation, ToolResult,
    ToolSpec,
};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// State of one loop run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    AwaitingModel,
    DispatchingTools,
    TerminatedOk,
    TerminatedError,
}

impl LoopState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopState::AwaitingModel => "awaiting_model",
            LoopState::DispatchingTools => "dispatching_tools",
            LoopState::TerminatedOk => "terminated_ok",
            LoopState::TerminatedError => "terminated_error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoopState::TerminatedOk | LoopState::TerminatedError)
    }
}

impl std::fmt::Display for LoopState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures that end a run in [`LoopState::TerminatedError`].
#[derive(Error, Debug)]
pub enum RunAgentError {
    #[error("Reasoning service error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Reasoning service did not respond within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Tool round budget exhausted after {0} rounds")]
    RoundBudgetExhausted(usize),

    #[error("No response from model")]
    EmptyResponse,
}

/// Input for the [`RunAgentUseCase`].
#[derive(Debug, Clone)]
pub struct RunAgentInput {
    pub request: String,
    /// Tools offered to the model in this run.
    pub tool_spec: ToolSpec,
    pub execution: ExecutionParams,
}

impl RunAgentInput {
    pub fn new(request: impl Into<String>, execution: ExecutionParams) -> Self {
        Self {
            request: request.into(),
            tool_spec: ToolSpec::full(),
            execution,
        }
    }

    pub fn with_tool_spec(mut self, spec: ToolSpec) -> Self {
        self.tool_spec = spec;
        self
    }
}

/// Result of one run, successful or not.
#[derive(Debug)]
pub struct RunAgentOutput {
    /// Always terminal.
    pub state: LoopState,
    pub answer: Option<String>,
    pub error: Option<RunAgentError>,
    /// Every executed tool call, in invocation order.
    pub tool_calls: Vec<ToolInvocation>,
    pub conversation: Conversation,
    /// Tool rounds dispatched.
    pub rounds: usize,
}

impl RunAgentOutput {
    pub fn is_ok(&self) -> bool {
        self.state == LoopState::TerminatedOk
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    /// Evaluation-log record for this run.
    pub fn to_record(
        &self,
        timestamp: DateTime<Utc>,
        request: impl Into<String>,
        latency: Duration,
    ) -> InteractionRecord {
        InteractionRecord::new(
            timestamp,
            request,
            &self.tool_calls,
            self.answer.as_deref(),
            latency,
            self.error_message(),
        )
    }
}

/// Use case running the orchestration loop.
pub struct RunAgentUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
}

impl Clone for RunAgentUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tool_executor: self.tool_executor.clone(),
            tool_schema: self.tool_schema.clone(),
        }
    }
}

impl RunAgentUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
        }
    }

    pub async fn execute(
        &self,
        input: RunAgentInput,
        progress: &dyn AgentProgressNotifier,
    ) -> RunAgentOutput {
        info!(
            "Starting agent run with {}: {}",
            self.gateway.model_name(),
            truncate_str(&input.request, 100)
        );

        let mut run = LoopRun {
            conversation: Conversation::seeded(
                AgentPromptTemplate::system_prompt(&input.tool_spec),
                &input.request,
            ),
            tool_calls: Vec::new(),
            rounds: 0,
        };
        let tools = self.tool_schema.tools_schema(&input.tool_spec);
        let max_turns = input.execution.max_tool_turns;

        debug!("Offering {} tools, round budget {}", tools.len(), max_turns);
        progress.on_state_change(LoopState::AwaitingModel);

        loop {
            progress.on_model_request(run.rounds);
            let response = match self
                .request_model(&run.conversation, &tools, input.execution.model_timeout)
                .await
            {
                Ok(response) => response,
                Err(e) => return run.fail(e, progress),
            };

            let text = response.text_content();
            let text = text.trim();
            if !text.is_empty() {
                progress.on_model_text(text);
            }

            let calls = response.tool_calls();
            if calls.is_empty() {
                if text.is_empty() {
                    return run.fail(RunAgentError::EmptyResponse, progress);
                }
                run.conversation.append(Message::assistant(text));
                return run.succeed(text.to_string(), progress);
            }

            run.conversation.append(Message::assistant_with_calls(
                (!text.is_empty()).then(|| text.to_string()),
                calls.clone(),
            ));

            if run.rounds >= max_turns {
                warn!("Agent exceeded max_tool_turns ({})", max_turns);
                let rounds = run.rounds;
                return run.fail(RunAgentError::RoundBudgetExhausted(rounds), progress);
            }

            run.rounds += 1;
            progress.on_state_change(LoopState::DispatchingTools);

            let results = self
                .dispatch(run.rounds, &calls, &input, progress)
                .await;

            for (call, result) in calls.iter().zip(results) {
                run.conversation.append(Message::tool(
                    &call.id,
                    &call.tool_name,
                    result.to_message_content(),
                ));
                run.tool_calls.push(ToolInvocation::new(run.rounds, call, &result));
            }

            debug!(
                "Tool round {}/{}: appended {} results",
                run.rounds,
                max_turns,
                calls.len()
            );
            progress.on_state_change(LoopState::AwaitingModel);
        }
    }

    async fn request_model(
        &self,
        conversation: &Conversation,
        tools: &[serde_json::Value],
        timeout: Option<Duration>,
    ) -> Result<LlmResponse, RunAgentError> {
        let call = self.gateway.complete(conversation, tools);
        match timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| RunAgentError::Timeout(limit))?
                .map_err(RunAgentError::from),
            None => call.await.map_err(RunAgentError::from),
        }
    }

    /// Execute one round. Results come back in request order.
    async fn dispatch(
        &self,
        round: usize,
        calls: &[ToolCall],
        input: &RunAgentInput,
        progress: &dyn AgentProgressNotifier,
    ) -> Vec<ToolResult> {
        for call in calls {
            debug!("Round {} calling {} ({})", round, call.tool_name, call.id);
            progress.on_tool_call(round, call);
        }

        let results = if input.execution.parallel_read_only && can_run_concurrently(calls) {
            let futures = calls.iter().map(|call| self.tool_executor.execute(call));
            futures::future::join_all(futures).await
        } else {
            let mut results = Vec::with_capacity(calls.len());
            for call in calls {
                results.push(self.tool_executor.execute(call).await);
            }
            results
        };

        for (call, result) in calls.iter().zip(&results) {
            if !result.is_success() {
                warn!(
                    "Tool {} failed: {}",
                    call.tool_name,
                    result.error().map(|e| e.to_string()).unwrap_or_default()
                );
            }
            progress.on_tool_result(round, call, result);
        }
        results
    }
}

/// A round may run concurrently only when every call resolves to a
/// read-only tool and no tool is named twice.
fn can_run_concurrently(calls: &[ToolCall]) -> bool {
    if calls.len() < 2 {
        return false;
    }
    let mut seen = HashSet::new();
    calls.iter().all(|call| {
        call.kind()
            .is_some_and(|kind| !kind.side_effect().is_mutating() && seen.insert(kind))
    })
}

struct LoopRun {
    conversation: Conversation,
    tool_calls: Vec<ToolInvocation>,
    rounds: usize,
}

impl LoopRun {
    fn succeed(self, answer: String, progress: &dyn AgentProgressNotifier) -> RunAgentOutput {
        info!(
            "Agent completed after {} tool rounds ({} calls)",
            self.rounds,
            self.tool_calls.len()
        );
        progress.on_state_change(LoopState::TerminatedOk);
        RunAgentOutput {
            state: LoopState::TerminatedOk,
            answer: Some(answer),
            error: None,
            tool_calls: self.tool_calls,
            conversation: self.conversation,
            rounds: self.rounds,
        }
    }

    fn fail(self, error: RunAgentError, progress: &dyn AgentProgressNotifier) -> RunAgentOutput {
        warn!("Agent run failed after {} tool rounds: {}", self.rounds, error);
        progress.on_state_change(LoopState::TerminatedError);
        RunAgentOutput {
            state: LoopState::TerminatedError,
            answer: None,
            error: Some(error),
            tool_calls: self.tool_calls,
            conversation: self.conversation,
            rounds: self.rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent_progress::NoAgentProgress;
    use airwatch_domain::{Role, ToolDefinition, ToolError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Replays scripted responses; once the script runs out it either keeps
    /// requesting a tool or fails.
    struct ScriptedGateway {
        responses: Mutex<VecDeque<LlmResponse>>,
        endless_tool_calls: bool,
        delay: Option<Duration>,
        calls: Mutex<usize>,
        seen_message_counts: Mutex<Vec<usize>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<LlmResponse>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                endless_tool_calls: false,
                delay: None,
                calls: Mutex::new(0),
                seen_message_counts: Mutex::new(Vec::new()),
            }
        }

        fn endless() -> Self {
            Self {
                endless_tool_calls: true,
                ..Self::new(vec![])
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn model_name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            conversation: &Conversation,
            _tools: &[serde_json::Value],
        ) -> Result<LlmResponse, GatewayError> {
            let n = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls
            };
            self.seen_message_counts
                .lock()
                .unwrap()
                .push(conversation.len());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(response) = self.responses.lock().unwrap().pop_front() {
                return Ok(response);
            }
            if self.endless_tool_calls {
                let id = format!("call_{n}");
                return Ok(tool_calls_response(&[(
                    id.as_str(),
                    "get_air_quality_report",
                    "{}",
                )]));
            }
            Err(GatewayError::ConnectionError("script exhausted".to_string()))
        }
    }

    struct RecordingExecutor {
        spec: ToolSpec,
        executed: Mutex<Vec<String>>,
        delays: Vec<(&'static str, Duration)>,
    }

    impl RecordingExecutor {
        fn new() -> Self {
            Self {
                spec: ToolSpec::full(),
                executed: Mutex::new(Vec::new()),
                delays: Vec::new(),
            }
        }

        fn executed(&self) -> Vec<String> {
            self.executed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolExecutorPort for RecordingExecutor {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            if let Some((_, delay)) = self.delays.iter().find(|(n, _)| *n == call.tool_name) {
                tokio::time::sleep(*delay).await;
            }
            self.executed.lock().unwrap().push(call.id.clone());
            match call.kind() {
                Some(kind) => ToolResult::success(kind.name(), format!(r#"{{"from":"{}"}}"#, call.id)),
                None => ToolResult::failure(&call.tool_name, ToolError::unknown_tool(&call.tool_name)),
            }
        }
    }

    struct NameOnlySchema;

    impl ToolSchemaPort for NameOnlySchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            serde_json::json!({ "name": tool.name })
        }
    }

    fn use_case(
        gateway: Arc<ScriptedGateway>,
        executor: Arc<RecordingExecutor>,
    ) -> RunAgentUseCase {
        RunAgentUseCase::new(gateway, executor, Arc::new(NameOnlySchema))
    }

    fn tool_calls_response(calls: &[(&str, &str, &str)]) -> LlmResponse {
        LlmResponse::from_tool_calls(
            calls
                .iter()
                .map(|(id, name, args)| ToolCall::new(*id, *name, *args)),
        )
    }

    fn tool_messages(output: &RunAgentOutput) -> Vec<(String, String)> {
        output
            .conversation
            .messages()
            .iter()
            .filter_map(|m| match m {
                Message::Tool {
                    tool_call_id,
                    content,
                    ..
                } => Some((tool_call_id.clone(), content.clone())),
                _ => None,
            })
            .collect()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_direct_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![LlmResponse::from_text(
            "Air quality is Good.",
        )]));
        let executor = Arc::new(RecordingExecutor::new());
        let output = use_case(gateway.clone(), executor.clone())
            .execute(
                RunAgentInput::new("How is the air?", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert_eq!(output.state, LoopState::TerminatedOk);
        assert_eq!(output.answer.as_deref(), Some("Air quality is Good."));
        assert!(output.error.is_none());
        assert_eq!(output.rounds, 0);
        assert_eq!(gateway.calls(), 1);
        assert!(executor.executed().is_empty());

        let roles: Vec<_> = output.conversation.messages().iter().map(|m| m.role()).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
    }

    #[tokio::test]
    async fn test_tool_round_then_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_calls_response(&[("call_1", "get_air_quality_report", "{}")]),
            LlmResponse::from_text("PM2.5 is Moderate."),
        ]));
        let executor = Arc::new(RecordingExecutor::new());
        let output = use_case(gateway.clone(), executor)
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert!(output.is_ok());
        assert_eq!(output.rounds, 1);
        assert_eq!(output.tool_calls.len(), 1);
        assert_eq!(output.tool_calls[0].round, 1);
        assert_eq!(output.tool_calls[0].call_id, "call_1");
        assert_eq!(
            tool_messages(&output),
            vec![("call_1".to_string(), r#"{"from":"call_1"}"#.to_string())]
        );
        // Second request carried system, user, assistant(calls) and tool messages.
        assert_eq!(*gateway.seen_message_counts.lock().unwrap(), vec![2, 4]);
    }

    #[tokio::test]
    async fn test_results_follow_call_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_calls_response(&[
                ("call_a", "save_relevant_event", r#"{"trigger":"t"}"#),
                ("call_b", "get_air_quality_report", "{}"),
            ]),
            LlmResponse::from_text("done"),
        ]));
        let executor = Arc::new(RecordingExecutor::new());
        let output = use_case(gateway, executor.clone())
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert_eq!(executor.executed(), vec!["call_a", "call_b"]);
        let ids: Vec<_> = tool_messages(&output).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["call_a", "call_b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_parallel_round_keeps_request_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_calls_response(&[
                ("call_a", "get_air_quality_report", "{}"),
                ("call_b", "get_historical_context", r#"{"hour":14,"day_of_week":"Monday"}"#),
            ]),
            LlmResponse::from_text("done"),
        ]));
        let executor = Arc::new(RecordingExecutor {
            delays: vec![("get_air_quality_report", Duration::from_secs(5))],
            ..RecordingExecutor::new()
        });
        let output = use_case(gateway, executor.clone())
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        // The slow report finished last, yet its result is appended first.
        assert_eq!(executor.executed(), vec!["call_b", "call_a"]);
        let ids: Vec<_> = tool_messages(&output).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["call_a", "call_b"]);
        let audit: Vec<_> = output.tool_calls.iter().map(|c| c.call_id.as_str()).collect();
        assert_eq!(audit, vec!["call_a", "call_b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_when_parallelism_disabled() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_calls_response(&[
                ("call_a", "get_air_quality_report", "{}"),
                ("call_b", "get_historical_context", "{}"),
            ]),
            LlmResponse::from_text("done"),
        ]));
        let executor = Arc::new(RecordingExecutor {
            delays: vec![("get_air_quality_report", Duration::from_secs(5))],
            ..RecordingExecutor::new()
        });
        let execution = ExecutionParams::default().with_parallel_read_only(false);
        use_case(gateway, executor.clone())
            .execute(RunAgentInput::new("report", execution), &NoAgentProgress)
            .await;

        assert_eq!(executor.executed(), vec!["call_a", "call_b"]);
    }

    #[tokio::test]
    async fn test_terminates_within_round_budget() {
        let gateway = Arc::new(ScriptedGateway::endless());
        let executor = Arc::new(RecordingExecutor::new());
        let execution = ExecutionParams::default().with_max_tool_turns(3);
        let output = use_case(gateway.clone(), executor.clone())
            .execute(RunAgentInput::new("loop forever", execution), &NoAgentProgress)
            .await;

        assert_eq!(output.state, LoopState::TerminatedError);
        assert!(matches!(
            output.error,
            Some(RunAgentError::RoundBudgetExhausted(3))
        ));
        assert!(output.answer.is_none());
        assert_eq!(gateway.calls(), 4);
        assert_eq!(executor.executed().len(), 3);
        assert_eq!(output.tool_calls.len(), 3);
    }

    #[tokio::test]
    async fn test_zero_budget_rejects_first_tool_request() {
        let gateway = Arc::new(ScriptedGateway::endless());
        let executor = Arc::new(RecordingExecutor::new());
        let execution = ExecutionParams::default().with_max_tool_turns(0);
        let output = use_case(gateway.clone(), executor.clone())
            .execute(RunAgentInput::new("report", execution), &NoAgentProgress)
            .await;

        assert!(matches!(
            output.error,
            Some(RunAgentError::RoundBudgetExhausted(0))
        ));
        assert_eq!(gateway.calls(), 1);
        assert!(executor.executed().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_keeps_partial_history() {
        // One tool round, then the script runs out and the gateway errors.
        let gateway = Arc::new(ScriptedGateway::new(vec![tool_calls_response(&[(
            "call_1",
            "get_air_quality_report",
            "{}",
        )])]));
        let executor = Arc::new(RecordingExecutor::new());
        let output = use_case(gateway, executor)
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert_eq!(output.state, LoopState::TerminatedError);
        assert!(matches!(
            output.error,
            Some(RunAgentError::Gateway(GatewayError::ConnectionError(_)))
        ));
        assert_eq!(output.tool_calls.len(), 1);
        assert_eq!(tool_messages(&output).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_model_timeout() {
        let gateway = Arc::new(ScriptedGateway {
            delay: Some(Duration::from_secs(120)),
            ..ScriptedGateway::new(vec![LlmResponse::from_text("too late")])
        });
        let executor = Arc::new(RecordingExecutor::new());
        let output = use_case(gateway, executor)
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert_eq!(output.state, LoopState::TerminatedError);
        let error = output.error.expect("timeout error");
        assert!(matches!(error, RunAgentError::Timeout(d) if d == Duration::from_secs(60)));
        assert_eq!(
            error.to_string(),
            "Reasoning service did not respond within 60s"
        );
    }

    #[tokio::test]
    async fn test_empty_final_answer_is_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![LlmResponse::from_text("   ")]));
        let executor = Arc::new(RecordingExecutor::new());
        let output = use_case(gateway, executor)
            .execute(
                RunAgentInput::new("report", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert!(matches!(output.error, Some(RunAgentError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_reported_back_not_fatal() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_calls_response(&[("call_x", "get_weather", "{}")]),
            LlmResponse::from_text("I can only report air quality."),
        ]));
        let executor = Arc::new(RecordingExecutor::new());
        let output = use_case(gateway, executor)
            .execute(
                RunAgentInput::new("weather?", ExecutionParams::default()),
                &NoAgentProgress,
            )
            .await;

        assert!(output.is_ok());
        assert!(!output.tool_calls[0].success);
        let (_, content) = &tool_messages(&output)[0];
        assert!(content.contains("NOT_FOUND"));
    }

    #[test]
    fn test_can_run_concurrently() {
        let report = ToolCall::new("a", "get_air_quality_report", "{}");
        let history = ToolCall::new("b", "get_historical_context", "{}");
        let save = ToolCall::new("c", "save_relevant_event", "{}");
        let unknown = ToolCall::new("d", "get_weather", "{}");

        assert!(can_run_concurrently(&[report.clone(), history.clone()]));
        assert!(!can_run_concurrently(&[report.clone()]));
        assert!(!can_run_concurrently(&[report.clone(), report.clone()]));
        assert!(!can_run_concurrently(&[report.clone(), save]));
        assert!(!can_run_concurrently(&[history, unknown]));
    }
}
