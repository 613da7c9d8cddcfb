//! Run Ask use case: an interactive question.
//!
//! Runs the agent for one user question and appends an interaction record.
//! Unlike [`RunCheckUseCase`](crate::use_cases::run_check::RunCheckUseCase)
//! nothing is delivered; the caller prints the answer.

use crate::ports::agent_progress::AgentProgressNotifier;
use crate::ports::clock::Clock;
use crate::ports::interaction_logger::InteractionLogger;
use crate::use_cases::run_agent::{RunAgentInput, RunAgentOutput, RunAgentUseCase};
use std::sync::Arc;
use std::time::Instant;

pub struct RunAskUseCase {
    agent: RunAgentUseCase,
    logger: Arc<dyn InteractionLogger>,
    clock: Arc<dyn Clock>,
}

impl RunAskUseCase {
    pub fn new(
        agent: RunAgentUseCase,
        logger: Arc<dyn InteractionLogger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            agent,
            logger,
            clock,
        }
    }

    pub async fn execute(
        &self,
        input: RunAgentInput,
        progress: &dyn AgentProgressNotifier,
    ) -> RunAgentOutput {
        let question = input.request.clone();
        let started = Instant::now();
        let output = self.agent.execute(input, progress).await;

        self.logger
            .log(&output.to_record(self.clock.now(), question, started.elapsed()));
        output
    }
}
