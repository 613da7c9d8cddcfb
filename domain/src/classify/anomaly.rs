//! Spread and variance anomaly flags.

use crate::telemetry::{SensorSummary, round_to};
use serde::{Deserialize, Serialize};

/// `(max - min) / mean` above this ratio flags `high_spread`.
pub const HIGH_SPREAD_RATIO: f64 = 0.5;

/// `variance / mean` above this ratio flags `high_variance`.
pub const HIGH_VARIANCE_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    HighSpread,
    HighVariance,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::HighSpread => "high_spread",
            AnomalyKind::HighVariance => "high_variance",
        }
    }
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An anomaly raised for one sensor in one window, with the values that
/// triggered it. Only ever surfaces inside a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFlag {
    pub sensor_id: String,
    #[serde(rename = "flag")]
    pub kind: AnomalyKind,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
    /// Spread as a percentage of the mean (spread flags only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_pct: Option<f64>,
}

impl AnomalyFlag {
    fn new(summary: &SensorSummary, kind: AnomalyKind, spread_pct: Option<f64>) -> Self {
        Self {
            sensor_id: summary.sensor_id.clone(),
            kind,
            mean: summary.mean,
            min: summary.min,
            max: summary.max,
            variance: summary.variance,
            spread_pct,
        }
    }
}

/// Classify a single summary. Spread is checked before variance, so a sensor
/// carries at most one flag. Sensors with a non-positive mean are skipped.
pub fn classify_summary(summary: &SensorSummary) -> Option<AnomalyFlag> {
    if summary.mean <= 0.0 {
        return None;
    }

    let spread_ratio = summary.spread() / summary.mean;
    if spread_ratio > HIGH_SPREAD_RATIO {
        let pct = round_to(spread_ratio * 100.0, 1);
        return Some(AnomalyFlag::new(summary, AnomalyKind::HighSpread, Some(pct)));
    }

    if summary.variance > HIGH_VARIANCE_RATIO * summary.mean {
        return Some(AnomalyFlag::new(summary, AnomalyKind::HighVariance, None));
    }

    None
}

/// Flag every summary that looks anomalous, in input order.
pub fn detect_anomalies(summaries: &[SensorSummary]) -> Vec<AnomalyFlag> {
    summaries.iter().filter_map(classify_summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, mean: f64, min: f64, max: f64, variance: f64) -> SensorSummary {
        SensorSummary {
            sensor_id: id.to_string(),
            mean,
            min,
            max,
            variance,
            sample_count: 12,
        }
    }

    #[test]
    fn spread_takes_priority_over_variance() {
        // spread 120 / 100 = 1.2, variance also far above 0.3 * mean
        let flags = detect_anomalies(&[summary("pm25", 100.0, 40.0, 160.0, 900.0)]);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].kind, AnomalyKind::HighSpread);
        assert_eq!(flags[0].spread_pct, Some(120.0));
    }

    #[test]
    fn high_variance_without_spread() {
        // spread 4 / 10 = 0.4 (below 0.5), variance 3.5 > 3.0
        let flag = classify_summary(&summary("pm10", 10.0, 8.0, 12.0, 3.5)).unwrap();
        assert_eq!(flag.kind, AnomalyKind::HighVariance);
        assert_eq!(flag.spread_pct, None);
    }

    #[test]
    fn calm_sensor_has_no_flag() {
        assert!(classify_summary(&summary("humidity", 50.0, 48.0, 52.0, 1.2)).is_none());
    }

    #[test]
    fn non_positive_mean_is_skipped() {
        assert!(classify_summary(&summary("o3", 0.0, -5.0, 5.0, 25.0)).is_none());
        assert!(classify_summary(&summary("temp", -2.0, -9.0, 3.0, 20.0)).is_none());
    }

    #[test]
    fn thresholds_are_strict() {
        // exactly 0.5 spread and exactly 0.3 variance ratio do not flag
        assert!(classify_summary(&summary("pm1", 10.0, 7.5, 12.5, 3.0)).is_none());
    }

    #[test]
    fn flags_are_deterministic() {
        let input = vec![
            summary("pm10", 10.0, 8.0, 12.0, 3.5),
            summary("pm25", 100.0, 40.0, 160.0, 900.0),
        ];
        assert_eq!(detect_anomalies(&input), detect_anomalies(&input));
        let serialized = serde_json::to_value(&detect_anomalies(&input)[1]).unwrap();
        assert_eq!(serialized["flag"], "high_spread");
    }
}
