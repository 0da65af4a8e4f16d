//! API module - the HTTP dispatcher
//!
//! Maps (method, path) to exactly one ingestion or metrics operation,
//! attaches CORS headers to every response, and falls back to the static
//! asset directory when no API route matches.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
