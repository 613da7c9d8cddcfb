//! Typed tool arguments and the decode step.
//!
//! The reasoning service sends arguments as a JSON-encoded string. Each tool
//! has its own request record; [`ToolRequest::decode`] turns the raw string
//! into that record or a structured [`ToolError`]. Models are loose with
//! scalar types, so booleans and numbers are also accepted as strings.

use super::entities::ToolKind;
use super::value_objects::ToolError;
use crate::event::{DayOfWeek, EventMeasurements};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Arguments of `get_air_quality_report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirQualityReportRequest {
    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub include_raw_metrics: bool,
}

impl Default for AirQualityReportRequest {
    fn default() -> Self {
        Self {
            include_raw_metrics: true,
        }
    }
}

/// Arguments of `get_historical_context`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoricalContextRequest {
    /// Station-local hour; the current one when omitted.
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub hour: Option<u32>,
    /// Station-local day; the current one when omitted.
    #[serde(default, deserialize_with = "opt_day_of_week")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(default)]
    pub sensor_id: Option<String>,
}

/// Arguments of `save_relevant_event`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveEventRequest {
    pub trigger: String,
    pub pattern_match: String,
    pub agent_notes: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub pm25_mean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub pm25_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub pm10_mean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub pm10_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub hour: Option<u32>,
    #[serde(default, deserialize_with = "opt_day_of_week")]
    pub day_of_week: Option<DayOfWeek>,
}

impl SaveEventRequest {
    pub fn measurements(&self) -> EventMeasurements {
        EventMeasurements {
            pm25_mean: self.pm25_mean,
            pm25_max: self.pm25_max,
            pm10_mean: self.pm10_mean,
            pm10_max: self.pm10_max,
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}

/// Decoded arguments for one tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    AirQualityReport(AirQualityReportRequest),
    HistoricalContext(HistoricalContextRequest),
    SaveRelevantEvent(SaveEventRequest),
}

impl ToolRequest {
    /// Decode raw JSON arguments for `kind`.
    ///
    /// An empty string or `null` counts as an empty object. Malformed JSON,
    /// non-object payloads, missing or unknown fields and out-of-range values
    /// all yield an `INVALID_ARGUMENT` error.
    pub fn decode(kind: ToolKind, raw: &str) -> Result<Self, ToolError> {
        let value = parse_object(kind, raw)?;
        let request = match kind {
            ToolKind::AirQualityReport => ToolRequest::AirQualityReport(from_value(kind, value)?),
            ToolKind::HistoricalContext => ToolRequest::HistoricalContext(from_value(kind, value)?),
            ToolKind::SaveRelevantEvent => ToolRequest::SaveRelevantEvent(from_value(kind, value)?),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            ToolRequest::AirQualityReport(_) => ToolKind::AirQualityReport,
            ToolRequest::HistoricalContext(_) => ToolKind::HistoricalContext,
            ToolRequest::SaveRelevantEvent(_) => ToolKind::SaveRelevantEvent,
        }
    }

    fn validate(&self) -> Result<(), ToolError> {
        let name = self.kind().name();
        match self {
            ToolRequest::AirQualityReport(_) => Ok(()),
            ToolRequest::HistoricalContext(req) => check_hour(name, req.hour),
            ToolRequest::SaveRelevantEvent(req) => {
                check_hour(name, req.hour)?;
                for (field, value) in [
                    ("trigger", &req.trigger),
                    ("pattern_match", &req.pattern_match),
                    ("agent_notes", &req.agent_notes),
                ] {
                    if value.trim().is_empty() {
                        return Err(ToolError::invalid_argument(format!(
                            "Argument '{field}' of {name} must not be empty"
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

fn parse_object(kind: ToolKind, raw: &str) -> Result<serde_json::Value, ToolError> {
    if raw.trim().is_empty() {
        return Ok(serde_json::Value::Object(Default::default()));
    }
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        ToolError::invalid_argument(format!("Arguments for {} are not valid JSON", kind.name()))
            .with_details(e.to_string())
    })?;
    match value {
        serde_json::Value::Null => Ok(serde_json::Value::Object(Default::default())),
        serde_json::Value::Object(_) => Ok(value),
        other => Err(ToolError::invalid_argument(format!(
            "Arguments for {} must be a JSON object, got {}",
            kind.name(),
            json_type_name(&other)
        ))),
    }
}

fn from_value<T: DeserializeOwned>(kind: ToolKind, value: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(value).map_err(|e| {
        ToolError::invalid_argument(format!("Invalid arguments for {}", kind.name()))
            .with_details(e.to_string())
    })
}

fn check_hour(tool: &str, hour: Option<u32>) -> Result<(), ToolError> {
    match hour {
        Some(h) if h > 23 => Err(ToolError::invalid_argument(format!(
            "Argument 'hour' of {tool} must be between 0 and 23, got {h}"
        ))),
        _ => Ok(()),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn default_true() -> bool {
    true
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Null => Ok(true),
        serde_json::Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(serde::de::Error::custom(format!("expected a boolean, got \"{s}\""))),
        },
        other => Err(serde::de::Error::custom(format!("expected a boolean, got {other}"))),
    }
}

fn value_to_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_u32(value: &serde_json::Value) -> Option<u32> {
    let number = value_to_f64(value)?;
    (number >= 0.0 && number.fract() == 0.0 && number <= u32::MAX as f64).then_some(number as u32)
}

fn lenient_opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => value_to_u32(&value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a whole number, got {value}"))
        }),
    }
}

fn lenient_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => value_to_f64(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {value}"))),
    }
}

fn opt_day_of_week<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DayOfWeek>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
