//! Pulse Metrics - event ingestion and metrics aggregation
//!
//! An HTTP endpoint for a small product-analytics pipeline: client
//! applications POST discrete lifecycle events, operators GET aggregate and
//! per-user answers back out.
//!
//! # Features
//!
//! - **Idempotent recording**: NewUser and ReachedLastScene are sets keyed
//!   by user id; duplicate submissions are silent no-ops
//! - **Append-only clicks**: every valid PaidClick submission is a new row
//! - **Durable journal**: every accepted event is fsynced to a JSON-lines
//!   journal before it is visible, and replayed on startup
//! - **Uniform CORS**: every response carries the CORS header set
//!
//! # Modules
//!
//! - `types`: record types, event kinds, and wire payloads
//! - `store`: the event store with its append-only journal
//! - `ingest`: validation and recording of incoming events
//! - `metrics`: read-only counts, presence, and dumps
//! - `api`: the axum dispatcher and REST handlers
//! - `config`: environment-derived server configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pulse_metrics::{create_router, AppState, EventStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(EventStore::open("data/events.jsonl")?);
//! let state = Arc::new(AppState::new(store));
//! let app = create_router(state, std::path::Path::new("public"));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod ingest;
pub mod metrics;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use ingest::{IngestOutcome, IngestionService};
pub use metrics::MetricsService;
pub use store::{EventStore, StorageError, StoreResult};
pub use types::{EventKind, EventPayload, LastScene, NewUser, PaidClick, Timestamp, UpdateUserPayload};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
