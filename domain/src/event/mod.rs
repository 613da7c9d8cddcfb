//! Relevant events: persisted noteworthy conditions keyed by time of week.
//!
//! Events are created only by the `save_relevant_event` tool, owned by the
//! event store, and never updated. Historical lookups match on the exact
//! `(hour, day_of_week)` slot; a [`SensorBaseline`] summarizes the values
//! recorded for one sensor in that slot.

pub mod baseline;
pub mod entities;

pub use baseline::{BASELINE_SENSORS, SensorBaseline};
pub use entities::{DayOfWeek, EventId, EventMeasurements, NewEvent, RelevantEvent, TimeSlot};
