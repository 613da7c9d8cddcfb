//! Pipeline parameters: what counts as "the current window".

use airwatch_domain::HealthThresholds;
use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};

/// Static parameters of the aggregation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParams {
    /// Length of the trailing window.
    pub window: Duration,
    /// How far the station's labeled timestamps lag true UTC.
    pub clock_skew: Duration,
    /// Station-local offset used for `(day_of_week, hour)` slots.
    pub station_offset: FixedOffset,
    pub health: HealthThresholds,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            window: Duration::hours(1),
            clock_skew: Duration::hours(13),
            station_offset: FixedOffset::west_opt(6 * 3600).unwrap_or_else(|| Utc.fix()),
            health: HealthThresholds::default(),
        }
    }
}

impl PipelineParams {
    /// Oldest labeled timestamp still inside the window ending at `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.window - self.clock_skew
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn with_clock_skew(mut self, skew: Duration) -> Self {
        self.clock_skew = skew;
        self
    }

    pub fn with_station_offset(mut self, offset: FixedOffset) -> Self {
        self.station_offset = offset;
        self
    }

    pub fn with_health(mut self, health: HealthThresholds) -> Self {
        self.health = health;
        self
    }
}
