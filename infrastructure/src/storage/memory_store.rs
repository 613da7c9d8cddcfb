//! In-memory event store for `--no-persist` runs and tests.

use super::jsonl_store::select_similar;
use airwatch_application::ports::event_store::{EventStore, PersistenceError};
use airwatch_domain::{DayOfWeek, EventId, NewEvent, RelevantEvent, TimeSlot};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Events live only as long as the process.
#[derive(Default)]
pub struct InMemoryEventStore {
    events: Mutex<Vec<RelevantEvent>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing events, e.g. a snapshot of the JSONL file.
    pub fn with_events(events: Vec<RelevantEvent>) -> Self {
        Self {
            events: Mutex::new(events),
        }
    }

    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.lock().await.is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn similar_events(
        &self,
        hour: u32,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<RelevantEvent>, PersistenceError> {
        let slot = TimeSlot::new(day_of_week, hour).ok_or(PersistenceError::InvalidHour(hour))?;
        let events = self.events.lock().await.clone();
        Ok(select_similar(events, slot))
    }

    async fn save_event(&self, event: NewEvent) -> Result<EventId, PersistenceError> {
        let id = EventId::new(uuid::Uuid::new_v4().to_string());
        self.events
            .lock()
            .await
            .push(RelevantEvent::from_new(id.clone(), event));
        Ok(id)
    }
}
