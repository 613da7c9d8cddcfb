//! Device health evaluation.

use crate::telemetry::SensorSummary;
use serde::{Deserialize, Serialize};

/// Overall device status. Ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Ok => "ok",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limits used by [`evaluate_device_health`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Below this voltage the battery is low (warning)
    pub low_battery_voltage: f64,
    /// Below this voltage the battery is critical
    pub critical_battery_voltage: f64,
    /// Above this internal temperature (°C) the enclosure is too hot
    pub max_internal_temp: f64,
    /// Below this state of charge (%) the battery is low
    pub low_battery_soc: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            low_battery_voltage: 3.6,
            critical_battery_voltage: 3.5,
            max_internal_temp: 60.0,
            low_battery_soc: 15.0,
        }
    }
}

/// Worst-case device values over one window.
///
/// Missing sensors are `None` and skip their check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceReadings {
    pub failure_code: Option<f64>,
    pub battery_voltage: Option<f64>,
    pub battery_soc: Option<f64>,
    pub internal_temp: Option<f64>,
}

impl DeviceReadings {
    /// Derive worst-case values from the device summary subset: highest
    /// failure code, lowest voltage and charge, hottest internal temperature.
    pub fn from_summaries(summaries: &[SensorSummary]) -> Self {
        let find = |id: &str| summaries.iter().find(|s| s.sensor_id == id);
        Self {
            failure_code: find("failure_code").map(|s| s.max),
            battery_voltage: find("battery_voltage").map(|s| s.min),
            battery_soc: find("battery_soc").map(|s| s.min),
            internal_temp: find("internal_temp").map(|s| s.max),
        }
    }
}

/// Result of one health evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceHealthStatus {
    pub status: HealthStatus,
    pub warnings: Vec<String>,
}

impl DeviceHealthStatus {
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            warnings: Vec::new(),
        }
    }

    /// Record a warning; status only ever moves up.
    fn raise(&mut self, severity: HealthStatus, message: String) {
        self.status = self.status.max(severity);
        self.warnings.push(message);
    }
}

/// Evaluate device health. Checks run in a fixed order and warnings
/// accumulate in that order; the status is the highest severity seen.
pub fn evaluate_device_health(
    readings: &DeviceReadings,
    thresholds: &HealthThresholds,
) -> DeviceHealthStatus {
    let mut health = DeviceHealthStatus::ok();

    if let Some(code) = readings.failure_code
        && code > 0.0
    {
        health.raise(
            HealthStatus::Warning,
            format!("Device reporting failure code: {code}"),
        );
    }

    if let Some(voltage) = readings.battery_voltage {
        if voltage < thresholds.low_battery_voltage {
            health.raise(
                HealthStatus::Warning,
                format!("Low battery voltage: {voltage}V"),
            );
        }
        if voltage < thresholds.critical_battery_voltage {
            health.raise(
                HealthStatus::Critical,
                format!("Critical battery voltage: {voltage}V"),
            );
        }
    }

    if let Some(temp) = readings.internal_temp
        && temp > thresholds.max_internal_temp
    {
        health.raise(
            HealthStatus::Warning,
            format!("High internal temperature: {temp}°C"),
        );
    }

    if let Some(soc) = readings.battery_soc
        && soc < thresholds.low_battery_soc
    {
        health.raise(
            HealthStatus::Warning,
            format!("Low battery charge: {soc}%"),
        );
    }

    health
}
