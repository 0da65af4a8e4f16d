//! Event Store - durable storage for the three event kinds
//!
//! The store keeps the three tables in memory behind a single lock and
//! persists every accepted mutation to an append-only JSON-lines journal
//! before the tables change. On startup the journal is replayed to rebuild
//! the tables.

mod journal;
mod store;

pub use journal::JournalEntry;
pub use store::{EventStore, StorageError, StoreResult};
