//! Event entities and the time-of-week key.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Day of week as stored with events (`"Monday"` .. `"Sunday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    /// Case-insensitive; accepts full names and three-letter abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|d| {
                let name = d.as_str().to_ascii_lowercase();
                name == lower || name[..3] == lower
            })
            .ok_or_else(|| format!("Invalid day of week: {s}"))
    }
}

/// An `(day_of_week, hour)` slot in station-local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day_of_week: DayOfWeek,
    pub hour: u32,
}

impl TimeSlot {
    /// Returns `None` when `hour` is outside `0..=23`.
    pub fn new(day_of_week: DayOfWeek, hour: u32) -> Option<Self> {
        (hour < 24).then_some(Self { day_of_week, hour })
    }

    /// Slot of `instant` as seen from the station's UTC offset.
    pub fn at(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        let local = instant.with_timezone(&offset);
        Self {
            day_of_week: local.weekday().into(),
            hour: local.hour(),
        }
    }
}

/// Identifier assigned by the event store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional sensor values captured alongside an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMeasurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm25_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl EventMeasurements {
    /// Value recorded for a sensor id. Particulate ids map to their means;
    /// `pm25_max` / `pm10_max` address the peaks directly.
    pub fn value_for(&self, sensor_id: &str) -> Option<f64> {
        match sensor_id {
            "pm25" | "pm25_mean" => self.pm25_mean,
            "pm25_max" => self.pm25_max,
            "pm10" | "pm10_mean" => self.pm10_mean,
            "pm10_max" => self.pm10_max,
            "temperature" => self.temperature,
            "humidity" => self.humidity,
            _ => None,
        }
    }
}

/// Fields of an event before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub timestamp: DateTime<Utc>,
    pub slot: TimeSlot,
    pub trigger: String,
    pub pattern_match: String,
    pub agent_notes: String,
    pub measurements: EventMeasurements,
}

/// A persisted relevant event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevantEvent {
    pub event_id: EventId,
    pub timestamp: DateTime<Utc>,
    pub day_of_week: DayOfWeek,
    pub hour: u32,
    pub trigger: String,
    pub pattern_match: String,
    pub agent_notes: String,
    #[serde(flatten)]
    pub measurements: EventMeasurements,
}

impl RelevantEvent {
    pub fn from_new(event_id: EventId, event: NewEvent) -> Self {
        Self {
            event_id,
            timestamp: event.timestamp,
            day_of_week: event.slot.day_of_week,
            hour: event.slot.hour,
            trigger: event.trigger,
            pattern_match: event.pattern_match,
            agent_notes: event.agent_notes,
            measurements: event.measurements,
        }
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            day_of_week: self.day_of_week,
            hour: self.hour,
        }
    }

    pub fn matches(&self, slot: TimeSlot) -> bool {
        self.slot() == slot
    }
}
