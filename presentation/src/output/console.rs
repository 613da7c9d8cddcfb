//! Console output formatter for station reports and agent runs

use airwatch_application::{CheckOutcome, InteractionRecord, RunAgentOutput};
use airwatch_domain::{
    AqiLevel, HealthStatus, PipelineOutcome, PollutantLevel, RelevantEvent, SensorBaseline,
    SensorSummary, StationSnapshot, TimeSlot,
};
use colored::{ColoredString, Colorize};

/// Formats pipeline outcomes, events and agent runs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a pipeline outcome (the `report` command)
    pub fn format_outcome(outcome: &PipelineOutcome) -> String {
        match outcome {
            PipelineOutcome::Ok(snapshot) => Self::format_snapshot(snapshot),
            PipelineOutcome::Error { message, timestamp } => format!(
                "{}\n{} {}\n",
                Self::header("Station Report"),
                "Error:".red().bold(),
                format!("{} ({})", message, timestamp.to_rfc3339()).red()
            ),
        }
    }

    /// Format as JSON
    pub fn format_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_snapshot(snapshot: &StationSnapshot) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Station Report"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Window end:".cyan().bold(),
            snapshot.timestamp.to_rfc3339()
        ));
        output.push_str(&format!(
            "{} {} readings, {} samples\n",
            "Fetched:".cyan().bold(),
            snapshot.samples_fetched,
            snapshot.unique_timestamps
        ));

        // Air quality
        output.push_str(&Self::section_header("Air Quality"));
        output.push_str(&Self::pollutant_line("PM2.5", snapshot.aqi.pm25_aqi.as_ref()));
        output.push_str(&Self::pollutant_line("PM10", snapshot.aqi.pm10_aqi.as_ref()));

        // Device health
        output.push_str(&Self::section_header("Device Health"));
        output.push_str(&format!(
            "  Status: {}\n",
            Self::health_label(snapshot.device_health.status)
        ));
        for warning in &snapshot.device_health.warnings {
            output.push_str(&format!("  {} {}\n", "!".yellow(), warning));
        }

        // Sensors
        if !snapshot.environmental.is_empty() {
            output.push_str(&Self::section_header("Sensors"));
            output.push_str(&Self::summary_table(&snapshot.environmental));
        }

        if !snapshot.anomalies.is_empty() {
            output.push_str(&Self::section_header("Anomalies"));
            for flag in &snapshot.anomalies {
                let detail = match flag.spread_pct {
                    Some(pct) => format!("spread {:.1}% of mean {}", pct, flag.mean),
                    None => format!("variance {} vs mean {}", flag.variance, flag.mean),
                };
                output.push_str(&format!(
                    "  {} {} {}\n",
                    flag.sensor_id.yellow().bold(),
                    flag.kind.to_string().yellow(),
                    detail.dimmed()
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn pollutant_line(label: &str, level: Option<&PollutantLevel>) -> String {
        match level {
            Some(p) => format!(
                "  {:<6} {:>8.2} ug/m3  {}\n",
                label,
                p.value,
                Self::aqi_label(p.level)
            ),
            None => format!("  {:<6} {}\n", label, "no data".dimmed()),
        }
    }

    fn summary_table(summaries: &[SensorSummary]) -> String {
        let mut output = format!(
            "  {:<14} {:>10} {:>10} {:>10} {:>10} {:>5}\n",
            "sensor", "mean", "min", "max", "variance", "n"
        )
        .dimmed()
        .to_string();
        output.push('\n');
        for s in summaries {
            output.push_str(&format!(
                "  {:<14} {:>10} {:>10} {:>10} {:>10} {:>5}\n",
                s.sensor_id, s.mean, s.min, s.max, s.variance, s.sample_count
            ));
        }
        output
    }

    /// Format saved events and baselines for one slot (the `events` command)
    pub fn format_events(
        slot: TimeSlot,
        events: &[RelevantEvent],
        baselines: &[SensorBaseline],
    ) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!(
            "Events for {} {:02}:00",
            slot.day_of_week, slot.hour
        )));
        output.push('\n');

        if events.is_empty() {
            output.push_str(&format!("{}\n", "No events recorded for this slot.".dimmed()));
        }
        for event in events {
            output.push_str(&format!(
                "\n{} {}\n",
                event.timestamp.to_rfc3339().yellow().bold(),
                event.trigger.bold()
            ));
            output.push_str(&format!("  {} {}\n", "Pattern:".cyan(), event.pattern_match));
            output.push_str(&format!(
                "  {} {}\n",
                "Notes:".cyan(),
                Self::indent(&event.agent_notes, "         ").trim_start()
            ));
            output.push_str(&format!("  {} {}\n", "Id:".dimmed(), event.event_id));
        }

        if !baselines.is_empty() {
            output.push_str(&Self::section_header("Baselines"));
            for b in baselines {
                output.push_str(&format!(
                    "  {:<12} mean {} (min {}, max {}, variance {}) over {} events\n",
                    b.sensor_id.bold(),
                    b.mean,
                    b.min,
                    b.max,
                    b.variance,
                    b.event_count
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format an agent run (the `ask` command)
    pub fn format_run(run: &RunAgentOutput) -> String {
        let mut output = String::new();

        if !run.tool_calls.is_empty() {
            output.push_str(&format!("{}\n", "Tools:".dimmed()));
            for call in &run.tool_calls {
                let mark = if call.success {
                    "v".green()
                } else {
                    "x".red()
                };
                let timing = match call.duration_ms {
                    Some(ms) => format!("(round {}, {} ms)", call.round, ms),
                    None => format!("(round {})", call.round),
                };
                output.push_str(&format!(
                    "  {} {} {}\n",
                    mark,
                    call.tool_name.cyan(),
                    timing.dimmed()
                ));
            }
            output.push('\n');
        }

        match (&run.answer, run.error_message()) {
            (Some(answer), _) => {
                output.push_str(answer);
                output.push('\n');
            }
            (None, Some(error)) => {
                output.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
            }
            (None, None) => {}
        }
        output
    }

    /// Status line for a scheduled check
    pub fn format_check(outcome: &CheckOutcome, channel: &str) -> String {
        let delivery = if outcome.notified {
            format!("delivered via {}", channel).green()
        } else {
            format!("not delivered via {}", channel).yellow()
        };
        let state = if outcome.run.is_ok() {
            outcome.run.state.to_string().green()
        } else {
            outcome.run.state.to_string().red()
        };
        format!(
            "{} {}, {} ({} rounds, {:.0} ms)\n",
            "Check:".cyan().bold(),
            state,
            delivery,
            outcome.run.rounds,
            outcome.record.latency_ms
        )
    }

    /// Format evaluation log records (the `logs` command)
    pub fn format_logs(records: &[InteractionRecord]) -> String {
        if records.is_empty() {
            return format!("{}\n", "No interactions logged yet.".dimmed());
        }

        let mut output = String::new();
        for record in records {
            let status = match &record.error {
                Some(_) => "error".red().bold(),
                None if record.response_generated => "ok".green().bold(),
                None => "empty".yellow().bold(),
            };
            output.push_str(&format!(
                "{} {} {} {}\n",
                record.timestamp.to_rfc3339().dimmed(),
                status,
                format!("{:.0} ms", record.latency_ms).dimmed(),
                record.user_message
            ));
            if !record.tools_called.is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    "tools:".dimmed(),
                    record.tools_called.join(", ")
                ));
            }
            if let Some(error) = &record.error {
                output.push_str(&format!("  {} {}\n", "error:".red(), error));
            } else if let Some(preview) = &record.response_preview {
                output.push_str(&format!("  {}\n", preview.replace('\n', " ")));
            }
        }
        output
    }

    /// Format configuration file locations
    pub fn format_config_sources(sources: &[(String, std::path::PathBuf, bool)]) -> String {
        let mut output = String::from("Configuration sources (in priority order):\n");
        output.push_str("  [ENV  ] AIRWATCH_* variables\n");
        for (label, path, found) in sources {
            let mark = if *found { "FOUND" } else { "     " };
            output.push_str(&format!("  [{}] {:<9} {}\n", mark, format!("{label}:"), path.display()));
        }
        output.push_str("  [     ] Default:  built-in defaults\n");
        output
    }

    fn aqi_label(level: AqiLevel) -> ColoredString {
        match level {
            AqiLevel::Good => "Good".green().bold(),
            AqiLevel::Moderate => "Moderate".yellow().bold(),
            AqiLevel::Unhealthy => "Unhealthy".red().bold(),
        }
    }

    fn health_label(status: HealthStatus) -> ColoredString {
        match status {
            HealthStatus::Ok => "ok".green().bold(),
            HealthStatus::Warning => "warning".yellow().bold(),
            HealthStatus::Critical => "critical".red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
