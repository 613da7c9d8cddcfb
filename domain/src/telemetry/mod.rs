//! Telemetry domain module: the windowed aggregation pipeline.
//!
//! The station API delivers a long-format stream: one [`Reading`] per sensor
//! per sampling tick. This module turns one window of that stream into a
//! deterministic set of per-sensor [`SensorSummary`] records.
//!
//! ```text
//! ┌────────────────┐   aggregate()   ┌────────────────────┐  split_families()  ┌──────────────┐
//! │ Vec<Reading>   │────────────────▶│ Vec<SensorSummary> │───────────────────▶│ env / device │
//! │ (one window)   │                 │ sorted by sensor   │                    │ subsets      │
//! └────────────────┘                 └────────────────────┘                    └──────────────┘
//! ```
//!
//! # Statistics
//!
//! All floating statistics go through [`SampleStats`], which uses the sample
//! variance (`n - 1` denominator, `0.0` for a single value) and rounds to
//! [`STAT_PRECISION`] decimal places. The event baseline path in
//! [`crate::event`] reuses the same routine so thresholds stay comparable.

pub mod reading;
pub mod sensors;
pub mod stats;
pub mod summary;

pub use reading::{Reading, count_unique_timestamps, parse_timestamp, retain_since};
pub use sensors::{DEVICE_SENSORS, ENVIRONMENTAL_SENSORS, SensorFamily, split_families};
pub use stats::{STAT_PRECISION, SampleStats, round_to};
pub use summary::{AggregationError, SensorSummary, aggregate};
