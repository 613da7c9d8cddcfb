//! Historical baselines per time-of-week slot.

use super::entities::{DayOfWeek, RelevantEvent, TimeSlot};
use crate::telemetry::SampleStats;
use serde::{Deserialize, Serialize};

/// Sensor ids summarized when a lookup does not name one.
pub const BASELINE_SENSORS: &[&str] = &["pm25", "pm25_max", "pm10", "pm10_max", "temperature", "humidity"];

/// Aggregate of the values recorded for one sensor in one slot.
///
/// Uses the same [`SampleStats`] routine as window aggregation, so a baseline
/// variance is directly comparable with a [`SensorSummary`](crate::telemetry::SensorSummary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorBaseline {
    pub sensor_id: String,
    pub day_of_week: DayOfWeek,
    pub hour: u32,
    pub event_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
}

impl SensorBaseline {
    /// Build a baseline from events. Events outside `slot` or without a value
    /// for `sensor_id` are ignored; `None` when nothing remains.
    pub fn from_events(events: &[RelevantEvent], slot: TimeSlot, sensor_id: &str) -> Option<Self> {
        let values: Vec<f64> = events
            .iter()
            .filter(|e| e.matches(slot))
            .filter_map(|e| e.measurements.value_for(sensor_id))
            .collect();

        SampleStats::from_values(&values).map(|stats| Self {
            sensor_id: sensor_id.to_string(),
            day_of_week: slot.day_of_week,
            hour: slot.hour,
            event_count: stats.count,
            mean: stats.mean,
            min: stats.min,
            max: stats.max,
            variance: stats.variance,
        })
    }

    /// Ratio of `value` to the baseline mean, when the mean is positive.
    pub fn ratio_to_mean(&self, value: f64) -> Option<f64> {
        (self.mean > 0.0).then(|| value / self.mean)
    }
}
