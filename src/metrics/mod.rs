//! Metrics Service - read-only answers over the Event Store
//!
//! Counts, per-user presence, and full dumps for the diagnostic endpoints.
//! Never mutates; a failed query yields no data, not partial data.

use std::sync::Arc;

use crate::store::{EventStore, StoreResult};
use crate::types::{EventKind, LastScene, NewUser, PaidClick};

/// Answers aggregate-count and existence queries.
pub struct MetricsService {
    store: Arc<EventStore>,
}

impl MetricsService {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    /// Total row count for a kind. Zero is a valid, non-error result.
    pub fn count(&self, kind: EventKind) -> StoreResult<usize> {
        self.store.count(kind)
    }

    /// True iff a NewUser row exists for the id. Absence is a distinct
    /// outcome, not an error.
    pub fn user_presence(&self, user_id: &str) -> StoreResult<bool> {
        self.store.user_exists(user_id)
    }

    /// Full NewUser dump. No pagination, no ordering guarantee; bounded
    /// only by store size.
    pub fn all_users(&self) -> StoreResult<Vec<NewUser>> {
        self.store.list_users()
    }

    /// Full PaidClick dump.
    pub fn all_paid_clicks(&self) -> StoreResult<Vec<PaidClick>> {
        self.store.list_paid_clicks()
    }

    /// Full ReachedLastScene dump.
    pub fn all_last_scenes(&self) -> StoreResult<Vec<LastScene>> {
        self.store.list_last_scenes()
    }
}
