//! Raw long-format readings from the station API.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A single sensor sample as delivered by the station API.
///
/// Several readings share a timestamp: the station reports one reading per
/// sensor per sampling tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Labeled sample time (see the clock-skew note on the acquisition adapter)
    #[serde(rename = "time", deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_identifier")]
    pub device_id: String,
    #[serde(deserialize_with = "deserialize_identifier")]
    pub sensor_id: String,
    pub value: f64,
}

impl Reading {
    pub fn new(
        timestamp: DateTime<Utc>,
        device_id: impl Into<String>,
        sensor_id: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            timestamp,
            device_id: device_id.into(),
            sensor_id: sensor_id.into(),
            value,
        }
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2025-03-01T10:00:00Z`, `+00:00` offsets) and naive
/// date-times, which are interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Identifiers arrive as strings from most stations, as integers from a few.
fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number identifier, got {other}"
        ))),
    }
}

/// Keep only readings labeled at or after `since`.
pub fn retain_since(readings: Vec<Reading>, since: DateTime<Utc>) -> Vec<Reading> {
    readings
        .into_iter()
        .filter(|r| r.timestamp >= since)
        .collect()
}

/// Number of distinct sampling ticks in a window.
pub fn count_unique_timestamps(readings: &[Reading]) -> usize {
    readings
        .iter()
        .map(|r| r.timestamp)
        .collect::<HashSet<_>>()
        .len()
}
