//! Event store port
//!
//! Append-only persistence of relevant events with exact-slot lookups.
//! Implementations must serialize concurrent [`EventStore::save_event`]
//! calls; overlapping runs may append at the same time.

use airwatch_domain::{DayOfWeek, EventId, NewEvent, RelevantEvent, SensorBaseline, TimeSlot};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Event store I/O error: {0}")]
    Io(String),

    #[error("Corrupt event record at line {line}: {message}")]
    Corrupt { line: usize, message: String },

    #[error("Could not encode event: {0}")]
    Encode(String),

    #[error("Invalid slot: hour {0} is out of range")]
    InvalidHour(u32),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Events recorded for exactly this `(hour, day_of_week)`, most recent first.
    async fn similar_events(
        &self,
        hour: u32,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<RelevantEvent>, PersistenceError>;

    /// Append an event and return its assigned id. Duplicates are not detected.
    async fn save_event(&self, event: NewEvent) -> Result<EventId, PersistenceError>;

    /// Historical aggregate for one sensor in one slot, `None` when no
    /// matching event carries a value for it.
    async fn baseline(
        &self,
        day_of_week: DayOfWeek,
        hour: u32,
        sensor_id: &str,
    ) -> Result<Option<SensorBaseline>, PersistenceError> {
        let slot = TimeSlot::new(day_of_week, hour).ok_or(PersistenceError::InvalidHour(hour))?;
        let events = self.similar_events(hour, day_of_week).await?;
        Ok(SensorBaseline::from_events(&events, slot, sensor_id))
    }
}
