//! Progress reporting for agent runs

use airwatch_application::{AgentProgressNotifier, LoopState};
use airwatch_domain::util::truncate_str;
use airwatch_domain::{ToolCall, ToolResult};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner that follows the orchestration loop
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    verbose: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            verbose: false,
        }
    }

    /// Also print each tool call and its outcome
    pub fn verbose() -> Self {
        Self {
            spinner: Mutex::new(None),
            verbose: true,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, prefix: &str, message: String) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(prefix.to_string());
        pb.set_message(message);
    }

    fn finish(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }

    fn println(&self, line: String) {
        let printed = self
            .spinner
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|pb| pb.println(&line)))
            .is_some();
        if !printed {
            eprintln!("{}", line);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentProgressNotifier for ProgressReporter {
    fn on_state_change(&self, state: LoopState) {
        if state.is_terminal() {
            self.finish();
        }
    }

    fn on_model_request(&self, round: usize) {
        let message = if round == 0 {
            "thinking...".to_string()
        } else {
            format!("reading results of round {}", round)
        };
        self.start_spinner("Model", message);
    }

    fn on_model_text(&self, text: &str) {
        if self.verbose {
            self.println(format!("    {}", truncate_str(text, 120).dimmed()));
        }
    }

    fn on_tool_call(&self, round: usize, call: &ToolCall) {
        self.start_spinner("Tools", format!("round {}: {}", round, call.tool_name));
        if self.verbose {
            self.println(format!(
                "  {} {} {}",
                "->".blue(),
                call.tool_name.cyan(),
                truncate_str(&call.arguments, 60).dimmed()
            ));
        }
    }

    fn on_tool_result(&self, _round: usize, call: &ToolCall, result: &ToolResult) {
        if !self.verbose {
            return;
        }
        let line = if result.is_success() {
            format!("  {} {}", "v".green(), call.tool_name.green())
        } else {
            let reason = result.error().map(|e| e.to_string()).unwrap_or_default();
            format!("  {} {} {}", "x".red(), call.tool_name.red(), reason.dimmed())
        };
        self.println(line);
    }
}

/// Simple text-based progress (no spinner), for non-interactive output
pub struct SimpleProgress;

impl AgentProgressNotifier for SimpleProgress {
    fn on_tool_call(&self, round: usize, call: &ToolCall) {
        eprintln!("{} round {}: {}", "->".cyan(), round, call.tool_name.bold());
    }

    fn on_tool_result(&self, _round: usize, call: &ToolCall, result: &ToolResult) {
        if result.is_success() {
            eprintln!("  {} {}", "v".green(), call.tool_name);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), call.tool_name);
        }
    }

    fn on_state_change(&self, state: LoopState) {
        if state == LoopState::TerminatedError {
            eprintln!("{} {}", "x".red(), state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_lifecycle_without_terminal() {
        let reporter = ProgressReporter::new();
        let call = ToolCall::new("c1", "get_air_quality_report", "{}");
        reporter.on_state_change(LoopState::AwaitingModel);
        reporter.on_model_request(0);
        reporter.on_tool_call(1, &call);
        reporter.on_tool_result(1, &call, &ToolResult::success("get_air_quality_report", "{}"));
        reporter.on_state_change(LoopState::TerminatedOk);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
