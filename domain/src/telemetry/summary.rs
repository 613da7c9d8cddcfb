//! Per-sensor window summaries.

use super::reading::Reading;
use super::stats::SampleStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced by window aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    /// The window contained no readings at all.
    #[error("No readings in aggregation window")]
    EmptyWindow,
}

/// Statistical digest of one sensor within one aggregation window.
///
/// Created fresh on every pipeline run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSummary {
    pub sensor_id: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
    pub sample_count: usize,
}

impl SensorSummary {
    fn from_stats(sensor_id: impl Into<String>, stats: SampleStats) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            mean: stats.mean,
            min: stats.min,
            max: stats.max,
            variance: stats.variance,
            sample_count: stats.count,
        }
    }

    /// `max - min` over the window.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Aggregate one window of readings into per-sensor summaries.
///
/// Output is sorted by `sensor_id`, and shuffling the input yields identical
/// summaries. An empty window is an error, never a zero-filled summary.
pub fn aggregate(readings: &[Reading]) -> Result<Vec<SensorSummary>, AggregationError> {
    if readings.is_empty() {
        return Err(AggregationError::EmptyWindow);
    }

    let mut partitions: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for reading in readings {
        partitions
            .entry(reading.sensor_id.as_str())
            .or_default()
            .push(reading.value);
    }

    Ok(partitions
        .into_iter()
        .filter_map(|(sensor_id, values)| {
            SampleStats::from_values(&values).map(|s| SensorSummary::from_stats(sensor_id, s))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn window() -> Vec<Reading> {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 3, 14, 0, 0).unwrap();
        let mut readings = Vec::new();
        for (i, (pm25, pm10)) in [(10.0, 30.0), (12.0, 34.0), (17.0, 41.0)].iter().enumerate() {
            let ts = t0 + Duration::minutes(5 * i as i64);
            readings.push(Reading::new(ts, "mty", "pm25", *pm25));
            readings.push(Reading::new(ts, "mty", "pm10", *pm10));
        }
        readings.push(Reading::new(t0, "mty", "battery_voltage", 3.9));
        readings
    }

    #[test]
    fn empty_window_is_an_error() {
        assert_eq!(aggregate(&[]), Err(AggregationError::EmptyWindow));
    }

    #[test]
    fn sample_count_matches_readings_per_sensor() {
        let readings = window();
        let summaries = aggregate(&readings).unwrap();
        for summary in &summaries {
            let expected = readings
                .iter()
                .filter(|r| r.sensor_id == summary.sensor_id)
                .count();
            assert_eq!(summary.sample_count, expected, "{}", summary.sensor_id);
        }
    }

    #[test]
    fn output_is_sorted_by_sensor_id() {
        let summaries = aggregate(&window()).unwrap();
        let ids: Vec<&str> = summaries.iter().map(|s| s.sensor_id.as_str()).collect();
        assert_eq!(ids, vec!["battery_voltage", "pm10", "pm25"]);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let readings = window();
        let mut reversed = readings.clone();
        reversed.reverse();
        let mut interleaved = readings.clone();
        interleaved.rotate_left(3);

        let expected = aggregate(&readings).unwrap();
        assert_eq!(aggregate(&reversed).unwrap(), expected);
        assert_eq!(aggregate(&interleaved).unwrap(), expected);
    }

    #[test]
    fn computes_statistics() {
        let summaries = aggregate(&window()).unwrap();
        let pm25 = summaries.iter().find(|s| s.sensor_id == "pm25").unwrap();
        assert_eq!(pm25.mean, 13.0);
        assert_eq!(pm25.min, 10.0);
        assert_eq!(pm25.max, 17.0);
        // deviations 9 + 1 + 16 = 26, / 2
        assert_eq!(pm25.variance, 13.0);
        assert_eq!(pm25.spread(), 7.0);

        let battery = summaries
            .iter()
            .find(|s| s.sensor_id == "battery_voltage")
            .unwrap();
        assert_eq!(battery.sample_count, 1);
        assert_eq!(battery.variance, 0.0);
    }
}
