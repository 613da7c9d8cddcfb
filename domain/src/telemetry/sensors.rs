//! Sensor families reported by the station.

use super::summary::SensorSummary;
use serde::{Deserialize, Serialize};

/// Environmental sensors the station is known to report.
pub const ENVIRONMENTAL_SENSORS: &[&str] = &[
    "pm1",
    "pm25",
    "pm4",
    "pm10",
    "temperature",
    "humidity",
    "o3",
    "no2",
    "so2",
];

/// Sensors describing the station hardware rather than the air.
pub const DEVICE_SENSORS: &[&str] = &[
    "battery_voltage",
    "battery_soc",
    "internal_temp",
    "failure_code",
];

/// Which part of the report a sensor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorFamily {
    Environmental,
    Device,
}

impl SensorFamily {
    /// Classify a sensor id. Unknown sensors are treated as environmental.
    pub fn of(sensor_id: &str) -> Self {
        if DEVICE_SENSORS.contains(&sensor_id) {
            SensorFamily::Device
        } else {
            SensorFamily::Environmental
        }
    }
}

/// Split summaries into `(environmental, device)`, preserving order.
pub fn split_families(summaries: Vec<SensorSummary>) -> (Vec<SensorSummary>, Vec<SensorSummary>) {
    summaries
        .into_iter()
        .partition(|s| SensorFamily::of(&s.sensor_id) == SensorFamily::Environmental)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> SensorSummary {
        SensorSummary {
            sensor_id: id.to_string(),
            mean: 1.0,
            min: 1.0,
            max: 1.0,
            variance: 0.0,
            sample_count: 1,
        }
    }

    #[test]
    fn classifies_sensors() {
        assert_eq!(SensorFamily::of("pm25"), SensorFamily::Environmental);
        assert_eq!(SensorFamily::of("battery_soc"), SensorFamily::Device);
        assert_eq!(SensorFamily::of("co2"), SensorFamily::Environmental);
    }

    #[test]
    fn split_keeps_order() {
        let (env, device) = split_families(vec![
            summary("battery_voltage"),
            summary("humidity"),
            summary("internal_temp"),
            summary("pm25"),
        ]);
        let env: Vec<_> = env.iter().map(|s| s.sensor_id.as_str()).collect();
        let device: Vec<_> = device.iter().map(|s| s.sensor_id.as_str()).collect();
        assert_eq!(env, vec!["humidity", "pm25"]);
        assert_eq!(device, vec!["battery_voltage", "internal_temp"]);
    }
}
