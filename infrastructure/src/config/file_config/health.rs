//! Device health thresholds from TOML (`[health]` section)

use airwatch_domain::HealthThresholds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHealthConfig {
    pub low_battery_voltage: f64,
    pub critical_battery_voltage: f64,
    pub max_internal_temp: f64,
    pub low_battery_soc: f64,
}

impl Default for FileHealthConfig {
    fn default() -> Self {
        let t = HealthThresholds::default();
        Self {
            low_battery_voltage: t.low_battery_voltage,
            critical_battery_voltage: t.critical_battery_voltage,
            max_internal_temp: t.max_internal_temp,
            low_battery_soc: t.low_battery_soc,
        }
    }
}

impl FileHealthConfig {
    pub fn thresholds(&self) -> HealthThresholds {
        HealthThresholds {
            low_battery_voltage: self.low_battery_voltage,
            critical_battery_voltage: self.critical_battery_voltage,
            max_internal_temp: self.max_internal_temp,
            low_battery_soc: self.low_battery_soc,
        }
    }
}
