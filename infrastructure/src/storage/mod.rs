//! Event store adapters
//!
//! [`JsonlEventStore`] persists relevant events to an append-only JSONL file;
//! [`InMemoryEventStore`] keeps them for the lifetime of the process.

mod jsonl_store;
mod memory_store;

pub use jsonl_store::JsonlEventStore;
pub use memory_store::InMemoryEventStore;
