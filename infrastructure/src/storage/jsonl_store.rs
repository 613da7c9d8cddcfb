//! JSONL-backed event store.
//!
//! One [`RelevantEvent`] per line, appended in save order. Lookups scan the
//! whole file; the store is expected to hold months of events, not millions.

use airwatch_application::ports::event_store::{EventStore, PersistenceError};
use airwatch_domain::{DayOfWeek, EventId, NewEvent, RelevantEvent, TimeSlot};
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// Append-only event file.
///
/// Each event is written with a single `write_all` of the full line on an
/// `O_APPEND` handle, so separate processes sharing the file never
/// interleave records. The async mutex orders saves within one process.
pub struct JsonlEventStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonlEventStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// Parent directories are created on first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored event in file order.
    pub async fn all_events(&self) -> Result<Vec<RelevantEvent>, PersistenceError> {
        let _guard = self.lock.lock().await;
        read_events(&self.path)
    }
}

fn read_events(path: &Path) -> Result<Vec<RelevantEvent>, PersistenceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(PersistenceError::Io(e.to_string())),
    };

    let mut events = Vec::new();
    for (index, line) in content.split_inclusive('\n').enumerate() {
        // A record without its newline is still being appended by another writer
        let Some(line) = line.strip_suffix('\n') else {
            debug!("Skipping incomplete trailing record at line {}", index + 1);
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|e| PersistenceError::Corrupt {
            line: index + 1,
            message: e.to_string(),
        })?;
        events.push(event);
    }
    Ok(events)
}

fn append_event(path: &Path, event: &RelevantEvent) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PersistenceError::Io(e.to_string()))?;
    }

    let mut line =
        serde_json::to_vec(event).map_err(|e| PersistenceError::Encode(e.to_string()))?;
    line.push(b'\n');
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PersistenceError::Io(e.to_string()))?;
    file.write_all(&line)
        .map_err(|e| PersistenceError::Io(e.to_string()))
}

/// Matching events, most recent first.
pub(crate) fn select_similar(events: Vec<RelevantEvent>, slot: TimeSlot) -> Vec<RelevantEvent> {
    let mut matching: Vec<RelevantEvent> = events
        .into_iter()
        .rev()
        .filter(|e| e.matches(slot))
        .collect();
    matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matching
}

#[async_trait]
impl EventStore for JsonlEventStore {
    async fn similar_events(
        &self,
        hour: u32,
        day_of_week: DayOfWeek,
    ) -> Result<Vec<RelevantEvent>, PersistenceError> {
        let slot = TimeSlot::new(day_of_week, hour).ok_or(PersistenceError::InvalidHour(hour))?;
        let _guard = self.lock.lock().await;
        let events = read_events(&self.path)?;
        Ok(select_similar(events, slot))
    }

    async fn save_event(&self, event: NewEvent) -> Result<EventId, PersistenceError> {
        let id = EventId::new(uuid::Uuid::new_v4().to_string());
        let record = RelevantEvent::from_new(id.clone(), event);

        let _guard = self.lock.lock().await;
        append_event(&self.path, &record)?;
        debug!(
            "Saved event {} ({}) to {}",
            id,
            record.trigger,
            self.path.display()
        );
        Ok(id)
    }
}
