//! Shared application state
//!
//! One state object per process, shared by every handler. Handlers are
//! stateless per request; all shared mutable state lives inside the
//! EventStore behind its own lock.

use std::sync::Arc;

use crate::ingest::IngestionService;
use crate::metrics::MetricsService;
use crate::store::EventStore;

/// Shared state handed to every request handler.
pub struct AppState {
    pub ingest: IngestionService,
    pub metrics: MetricsService,
}

impl AppState {
    /// Create the state with both services over the same store.
    pub fn new(store: Arc<EventStore>) -> Self {
        Self {
            ingest: IngestionService::new(Arc::clone(&store)),
            metrics: MetricsService::new(store),
        }
    }
}
