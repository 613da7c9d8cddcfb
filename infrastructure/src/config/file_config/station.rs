//! Station configuration from TOML (`[station]` section)

use chrono::{Duration, FixedOffset};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATION_URL: &str =
    "https://colmena.stguimel.com/api/monnet/mty_sureste_sima/timeseries";

/// Raw station configuration from TOML
///
/// # Example
///
/// ```toml
/// [station]
/// base_url = "https://colmena.stguimel.com/api/monnet/mty_sureste_sima/timeseries"
/// limit = 20
/// window_minutes = 60
/// clock_skew_hours = 13     # the station labels local time as UTC
/// utc_offset_hours = -6     # Monterrey
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStationConfig {
    /// Timeseries endpoint (without query string)
    pub base_url: String,
    /// Number of most recent records requested per fetch
    pub limit: u32,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Length of the aggregation window
    pub window_minutes: i64,
    /// How far the labeled timestamps lag true UTC
    pub clock_skew_hours: i64,
    /// Station local offset used for event slots
    pub utc_offset_hours: i32,
}

impl Default for FileStationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STATION_URL.to_string(),
            limit: 20,
            timeout_secs: 30,
            window_minutes: 60,
            clock_skew_hours: 13,
            utc_offset_hours: -6,
        }
    }
}

impl FileStationConfig {
    pub fn window(&self) -> Duration {
        Duration::minutes(self.window_minutes)
    }

    pub fn clock_skew(&self) -> Duration {
        Duration::hours(self.clock_skew_hours)
    }

    /// `None` when the offset is outside ±23 hours.
    pub fn station_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours.checked_mul(3600)?)
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
