//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Whether a tool changes persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideEffect {
    /// Reads telemetry or history only
    ReadOnly,
    /// Appends to the event store
    Mutating,
}

impl SideEffect {
    pub fn as_str(&self) -> &str {
        match self {
            SideEffect::ReadOnly => "read_only",
            SideEffect::Mutating => "mutating",
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, SideEffect::Mutating)
    }
}

impl std::fmt::Display for SideEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of tools exposed to the reasoning service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    AirQualityReport,
    HistoricalContext,
    SaveRelevantEvent,
}

pub const GET_AIR_QUALITY_REPORT: &str = "get_air_quality_report";
pub const GET_HISTORICAL_CONTEXT: &str = "get_historical_context";
pub const SAVE_RELEVANT_EVENT: &str = "save_relevant_event";

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [
        ToolKind::AirQualityReport,
        ToolKind::HistoricalContext,
        ToolKind::SaveRelevantEvent,
    ];

    /// Name the reasoning service uses for this tool.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::AirQualityReport => GET_AIR_QUALITY_REPORT,
            ToolKind::HistoricalContext => GET_HISTORICAL_CONTEXT,
            ToolKind::SaveRelevantEvent => SAVE_RELEVANT_EVENT,
        }
    }

    /// Resolve a tool name from a model response.
    pub fn from_name(name: &str) -> Option<Self> {
        ToolKind::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn side_effect(&self) -> SideEffect {
        match self {
            ToolKind::AirQualityReport | ToolKind::HistoricalContext => SideEffect::ReadOnly,
            ToolKind::SaveRelevantEvent => SideEffect::Mutating,
        }
    }

    /// Schema-level description of this tool.
    pub fn definition(&self) -> ToolDefinition {
        match self {
            ToolKind::AirQualityReport => ToolDefinition::new(
                *self,
                "Fetches the last hour of station readings, calculates AQI levels, evaluates \
                 device health and flags anomalous sensors. Returns a complete report of the \
                 station status, or status=error when no data is available.",
            )
            .with_parameter(
                ToolParameter::new(
                    "include_raw_metrics",
                    "Whether to include per-sensor statistics and anomaly flags. Default is true.",
                    false,
                )
                .with_type("boolean"),
            ),
            ToolKind::HistoricalContext => ToolDefinition::new(
                *self,
                "Looks up previously saved relevant events for the same hour and day of week, \
                 plus historical baselines (mean, min, max, variance) for that slot. Use it to \
                 decide whether a condition is recurring or new.",
            )
            .with_parameter(
                ToolParameter::new(
                    "hour",
                    "Hour of day in station local time (0-23); defaults to the current local hour",
                    false,
                )
                .with_type("integer"),
            )
            .with_parameter(
                ToolParameter::new(
                    "day_of_week",
                    "Day of week in station local time, e.g. Monday; defaults to today",
                    false,
                )
                .with_enum(crate::event::DayOfWeek::ALL.iter().map(|d| d.as_str())),
            )
            .with_parameter(ToolParameter::new(
                "sensor_id",
                "Restrict the baseline to one sensor, e.g. pm25 or humidity. Without it, \
                 baselines cover pm25, pm25_max, pm10, pm10_max, temperature and humidity.",
                false,
            )),
            ToolKind::SaveRelevantEvent => ToolDefinition::new(
                *self,
                "Persists a relevant event (anomaly, spike, device problem) so future runs can \
                 correlate against it. Only save conditions worth remembering; do not save \
                 routine readings.",
            )
            .with_parameter(ToolParameter::new(
                "trigger",
                "Short machine-friendly cause, e.g. pm25_spike or low_battery",
                true,
            ))
            .with_parameter(ToolParameter::new(
                "pattern_match",
                "Whether this matches a historical pattern and which one",
                true,
            ))
            .with_parameter(ToolParameter::new(
                "agent_notes",
                "Free-form notes explaining why the event is relevant",
                true,
            ))
            .with_parameter(ToolParameter::new("pm25_mean", "PM2.5 mean (ug/m3)", false).with_type("number"))
            .with_parameter(ToolParameter::new("pm25_max", "PM2.5 max (ug/m3)", false).with_type("number"))
            .with_parameter(ToolParameter::new("pm10_mean", "PM10 mean (ug/m3)", false).with_type("number"))
            .with_parameter(ToolParameter::new("pm10_max", "PM10 max (ug/m3)", false).with_type("number"))
            .with_parameter(ToolParameter::new("temperature", "Temperature mean (C)", false).with_type("number"))
            .with_parameter(ToolParameter::new("humidity", "Humidity mean (%)", false).with_type("number"))
            .with_parameter(
                ToolParameter::new("hour", "Override hour of day in station local time (0-23); defaults to now", false)
                    .with_type("integer"),
            )
            .with_parameter(
                ToolParameter::new("day_of_week", "Override day of week in station local time; defaults to today", false)
                    .with_enum(crate::event::DayOfWeek::ALL.iter().map(|d| d.as_str())),
            ),
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Definition of a tool that can be offered to the reasoning service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub kind: ToolKind,
    /// Unique name of the tool (e.g., "get_air_quality_report")
    pub name: String,
    /// Human-readable description
    pub description: String,
    pub side_effect: SideEffect,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Parameter type hint ("string", "integer", "number", "boolean")
    pub param_type: String,
    /// Allowed values, when the parameter is an enumeration
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

impl ToolDefinition {
    pub fn new(kind: ToolKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            description: description.into(),
            side_effect: kind.side_effect(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_mutating(&self) -> bool {
        self.side_effect.is_mutating()
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
            allowed_values: Vec::new(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    pub fn with_enum<'a>(mut self, values: impl IntoIterator<Item = &'a str>) -> Self {
        self.allowed_values = values.into_iter().map(String::from).collect();
        self
    }
}

/// The tools offered to the model in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    kinds: Vec<ToolKind>,
}

impl ToolSpec {
    /// Every tool, including the mutating event save.
    pub fn full() -> Self {
        Self {
            kinds: ToolKind::ALL.to_vec(),
        }
    }

    /// Read-only tools only.
    pub fn read_only() -> Self {
        Self {
            kinds: ToolKind::ALL
                .into_iter()
                .filter(|k| !k.side_effect().is_mutating())
                .collect(),
        }
    }

    pub fn contains(&self, kind: ToolKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> &[ToolKind] {
        &self.kinds
    }

    /// Definitions in registry order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.kinds.iter().map(|k| k.definition()).collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().map(|k| k.name())
    }
}

impl Default for ToolSpec {
    fn default() -> Self {
        Self::full()
    }
}

/// A call to a tool as issued by the reasoning service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Service-assigned id used to correlate the tool result
    pub id: String,
    /// Name of the tool to call, as sent by the model
    pub tool_name: String,
    /// JSON-encoded arguments, exactly as received
    pub arguments: String,
}

impl ToolCall {
    pub fn new(
        id: impl Into<String>,
        tool_name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tool_name: tool_name.into(),
            arguments: arguments.into(),
        }
    }

    /// Resolve the tool name against the registry.
    pub fn kind(&self) -> Option<ToolKind> {
        ToolKind::from_name(&self.tool_name)
    }
}
