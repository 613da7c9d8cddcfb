//! Prompt templates for the station agent

use crate::tool::entities::{ToolKind, ToolSpec};

/// Request sent by scheduled runs when no explicit request is given.
pub const DEFAULT_SCHEDULED_REQUEST: &str =
    "Ejecuta un reporte general de la estación de monitoreo.";

/// Templates for generating agent prompts
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// System instruction seeding every conversation.
    ///
    /// Guidance for the event tools is only included when those tools are
    /// offered in this run.
    pub fn system_prompt(tool_spec: &ToolSpec) -> String {
        let mut prompt = String::from(
            r#"You are an air quality monitoring agent. Your job is to analyze data from a low-cost
air quality sensor station and provide clear, accurate assessments.

Always use the tools to get real data before responding.

When analyzing data:
- Report AQI levels clearly (Good, Moderate, Unhealthy)
- Flag any device health warnings immediately
- Be concise and factual
- If values seem anomalous, mention it
- If the report comes back with status "error", say that no data is available right now"#,
        );

        if tool_spec.contains(ToolKind::HistoricalContext) {
            prompt.push_str(
                r#"

Historical context:
- Events are keyed by station local time; the report's local_time holds the current day_of_week and hour (timestamp is UTC)
- Before calling something unusual, use get_historical_context for that slot (omit hour and day_of_week to use the current one)
- Compare current values with the baseline and say whether they are typical for this time slot"#,
            );
        }

        if tool_spec.contains(ToolKind::SaveRelevantEvent) {
            prompt.push_str(
                r#"

Relevant events:
- Use save_relevant_event only for genuinely noteworthy conditions (spikes, recurring patterns, device faults)
- Do not save an event that duplicates one already recorded for the same slot and trigger
- Include the measurements that justify the event"#,
            );
        }

        prompt
    }

    /// Short line listing the tools, used in verbose progress output.
    pub fn tool_summary(tool_spec: &ToolSpec) -> String {
        tool_spec
            .definitions()
            .iter()
            .map(|d| format!("{} ({})", d.name, d.side_effect.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
