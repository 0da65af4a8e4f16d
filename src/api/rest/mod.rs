//! REST handlers for the ingestion and metrics routes
//!
//! - `POST /events/user` - record a first-seen user (idempotent)
//! - `POST /events/paid-click` - record a paid-content click (append-only)
//! - `POST /events/last-scene` - record reaching the terminal scene (idempotent)
//! - `POST /events/update-user` - set the email of an existing user
//! - `GET /metrics/users/:userId` - per-user presence check
//! - `GET /metrics/users` / `/metrics/paid_clicks` / `/metrics/last_scenes` -
//!   full dumps, or aggregate counts with `?shape=count`

pub mod events;
pub mod metrics;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

/// Dump-shaped metrics body: `{"results": [...]}`.
#[derive(Debug, Serialize)]
pub struct ResultsBody<T> {
    pub results: Vec<T>,
}

/// Shared OPTIONS handler for the API routes.
///
/// Preflight succeeds with no body and the full CORS header set, so a
/// browser never needs a round trip beyond this response.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        (),
    )
}
