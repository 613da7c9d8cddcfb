use crate::classify::{
    AnomalyFlag, AqiAssessment, DeviceHealthStatus, DeviceReadings, HealthThresholds, assess_aqi,
    detect_anomalies, evaluate_device_health,
};
use crate::event::TimeSlot;
use crate::telemetry::{
    AggregationError, Reading, SensorSummary, aggregate, count_unique_timestamps, split_families,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything derived from one window of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub timestamp: DateTime<Utc>,
    pub samples_fetched: usize,
    pub unique_timestamps: usize,
    pub environmental: Vec<SensorSummary>,
    pub device: Vec<SensorSummary>,
    pub device_health: DeviceHealthStatus,
    pub anomalies: Vec<AnomalyFlag>,
    pub aqi: AqiAssessment,
}

impl StationSnapshot {
    /// Aggregate and classify a window.
    ///
    /// Anomaly flags and AQI levels cover environmental sensors only; device
    /// health is evaluated from the device family.
    pub fn build(
        timestamp: DateTime<Utc>,
        readings: &[Reading],
        thresholds: &HealthThresholds,
    ) -> Result<Self, AggregationError> {
        let summaries = aggregate(readings)?;
        let (environmental, device) = split_families(summaries);

        let device_health = evaluate_device_health(&DeviceReadings::from_summaries(&device), thresholds);
        let anomalies = detect_anomalies(&environmental);
        let aqi = assess_aqi(&environmental);

        Ok(Self {
            timestamp,
            samples_fetched: readings.len(),
            unique_timestamps: count_unique_timestamps(readings),
            environmental,
            device,
            device_health,
            anomalies,
            aqi,
        })
    }

    pub fn summary(&self, sensor_id: &str) -> Option<&SensorSummary> {
        self.environmental
            .iter()
            .chain(self.device.iter())
            .find(|s| s.sensor_id == sensor_id)
    }
}

/// Payload of the `get_air_quality_report` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReport {
    pub timestamp: DateTime<Utc>,
    /// Station-local day and hour of `timestamp`; the key used by the event tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_time: Option<TimeSlot>,
    pub aqi: AqiAssessment,
    pub device_health: DeviceHealthStatus,
    pub samples_fetched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_metrics: Option<Vec<SensorSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomalies: Option<Vec<AnomalyFlag>>,
}

impl AirQualityReport {
    /// Build the report; raw metrics and anomaly flags only when requested.
    pub fn from_snapshot(snapshot: &StationSnapshot, include_raw_metrics: bool) -> Self {
        Self {
            timestamp: snapshot.timestamp,
            local_time: None,
            aqi: snapshot.aqi.clone(),
            device_health: snapshot.device_health.clone(),
            samples_fetched: snapshot.samples_fetched,
            environmental_metrics: include_raw_metrics.then(|| snapshot.environmental.clone()),
            anomalies: include_raw_metrics.then(|| snapshot.anomalies.clone()),
        }
    }

    pub fn with_local_time(mut self, slot: TimeSlot) -> Self {
        self.local_time = Some(slot);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{AnomalyKind, AqiLevel, HealthStatus};
    use chrono::TimeZone;

    fn reading(minute: u32, sensor: &str, value: f64) -> Reading {
        Reading::new(
            Utc.with_ymd_and_hms(2026, 3, 2, 14, minute, 0).unwrap(),
            "sima-01",
            sensor,
            value,
        )
    }

    fn window() -> Vec<Reading> {
        vec![
            reading(0, "pm25", 40.0),
            reading(0, "pm10", 30.0),
            reading(0, "battery_voltage", 3.7),
            reading(0, "failure_code", 0.0),
            reading(5, "pm25", 160.0),
            reading(5, "pm10", 32.0),
            reading(5, "battery_voltage", 3.4),
            reading(5, "failure_code", 2.0),
            reading(10, "pm25", 100.0),
            reading(10, "pm10", 31.0),
        ]
    }

    #[test]
    fn build_classifies_window() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 15, 0, 0).unwrap();
        let snapshot = StationSnapshot::build(now, &window(), &HealthThresholds::default()).unwrap();

        assert_eq!(snapshot.samples_fetched, 10);
        assert_eq!(snapshot.unique_timestamps, 3);
        assert_eq!(snapshot.environmental.len(), 2);
        assert_eq!(snapshot.device.len(), 2);

        assert_eq!(snapshot.anomalies.len(), 1);
        assert_eq!(snapshot.anomalies[0].sensor_id, "pm25");
        assert_eq!(snapshot.anomalies[0].kind, AnomalyKind::HighSpread);

        assert_eq!(snapshot.aqi.pm25_aqi.as_ref().unwrap().level, AqiLevel::Unhealthy);
        assert_eq!(snapshot.aqi.pm10_aqi.as_ref().unwrap().level, AqiLevel::Good);

        assert_eq!(snapshot.device_health.status, HealthStatus::Critical);
        assert!(snapshot.device_health.warnings.len() >= 2);
    }

    #[test]
    fn build_rejects_empty_window() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 15, 0, 0).unwrap();
        let err = StationSnapshot::build(now, &[], &HealthThresholds::default()).unwrap_err();
        assert_eq!(err, AggregationError::EmptyWindow);
    }

    #[test]
    fn report_omits_raw_metrics_on_request() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 15, 0, 0).unwrap();
        let snapshot = StationSnapshot::build(now, &window(), &HealthThresholds::default()).unwrap();

        let full = serde_json::to_value(AirQualityReport::from_snapshot(&snapshot, true)).unwrap();
        assert!(full["environmental_metrics"].is_array());
        assert_eq!(full["anomalies"][0]["flag"], "high_spread");

        let brief = serde_json::to_value(AirQualityReport::from_snapshot(&snapshot, false)).unwrap();
        assert!(brief.get("environmental_metrics").is_none());
        assert!(brief.get("anomalies").is_none());
        assert_eq!(brief["samples_fetched"], 10);
        assert_eq!(brief["device_health"]["status"], "critical");
    }
}
