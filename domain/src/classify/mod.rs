//! Classification of window summaries.
//!
//! Pure functions over [`SensorSummary`](crate::telemetry::SensorSummary)
//! sets: no I/O, no mutation, deterministic for the same input.
//!
//! - [`anomaly`]: at most one spread/variance flag per environmental sensor
//! - [`health`]: device health with monotonic severity escalation
//! - [`aqi`]: WHO guideline levels for PM2.5 and PM10 means

pub mod anomaly;
pub mod aqi;
pub mod health;

pub use anomaly::{AnomalyFlag, AnomalyKind, HIGH_SPREAD_RATIO, HIGH_VARIANCE_RATIO, detect_anomalies};
pub use aqi::{AqiAssessment, AqiLevel, PollutantLevel, assess_aqi};
pub use health::{
    DeviceHealthStatus, DeviceReadings, HealthStatus, HealthThresholds, evaluate_device_health,
};
