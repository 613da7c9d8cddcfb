//! Air quality levels from particulate means (WHO guideline bands).

use crate::telemetry::SensorSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    Unhealthy,
}

impl AqiLevel {
    /// PM2.5 bands (µg/m³): < 15 good, < 35 moderate.
    pub fn for_pm25(mean: f64) -> Self {
        Self::banded(mean, 15.0, 35.0)
    }

    /// PM10 bands (µg/m³): < 45 good, < 100 moderate.
    pub fn for_pm10(mean: f64) -> Self {
        Self::banded(mean, 45.0, 100.0)
    }

    fn banded(mean: f64, good_below: f64, moderate_below: f64) -> Self {
        if mean < good_below {
            AqiLevel::Good
        } else if mean < moderate_below {
            AqiLevel::Moderate
        } else {
            AqiLevel::Unhealthy
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantLevel {
    pub value: f64,
    pub level: AqiLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AqiAssessment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm25_aqi: Option<PollutantLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm10_aqi: Option<PollutantLevel>,
}

/// Grade the PM2.5 and PM10 window means. Other sensors are ignored.
pub fn assess_aqi(summaries: &[SensorSummary]) -> AqiAssessment {
    let mut assessment = AqiAssessment::default();
    for summary in summaries {
        match summary.sensor_id.as_str() {
            "pm25" => {
                assessment.pm25_aqi = Some(PollutantLevel {
                    value: summary.mean,
                    level: AqiLevel::for_pm25(summary.mean),
                })
            }
            "pm10" => {
                assessment.pm10_aqi = Some(PollutantLevel {
                    value: summary.mean,
                    level: AqiLevel::for_pm10(summary.mean),
                })
            }
            _ => {}
        }
    }
    assessment
}
