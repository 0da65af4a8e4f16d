//! Ingestion endpoints
//!
//! The POST handlers take the raw body and parse it themselves so that a
//! malformed body maps to 400 "Invalid payload" like any other client
//! fault, instead of the extractor's default rejection.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::state::AppState;
use crate::ingest::IngestOutcome;
use crate::store::StoreResult;
use crate::types::{EventKind, EventPayload, UpdateUserPayload};

/// POST /events/user - idempotent first-seen marker
pub async fn record_user(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    record(&state, EventKind::NewUser, &body)
}

/// POST /events/paid-click - append-only click log
pub async fn record_paid_click(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    record(&state, EventKind::PaidClick, &body)
}

/// POST /events/last-scene - idempotent first-reached marker
pub async fn record_last_scene(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    record(&state, EventKind::ReachedLastScene, &body)
}

/// POST /events/update-user - set the email of an existing user
pub async fn update_user(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let payload: UpdateUserPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return invalid_payload(),
    };

    respond(state.ingest.update_user(&payload))
}

fn record(state: &AppState, kind: EventKind, body: &[u8]) -> Response {
    let payload: EventPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(_) => return invalid_payload(),
    };

    respond(state.ingest.record(kind, &payload))
}

fn invalid_payload() -> Response {
    (StatusCode::BAD_REQUEST, "Invalid payload").into_response()
}

/// Map a service outcome to the wire contract. Storage faults become an
/// opaque 500; internal detail goes to the server log only.
fn respond(result: StoreResult<IngestOutcome>) -> Response {
    match result {
        Ok(IngestOutcome::Accepted) => (StatusCode::OK, "OK").into_response(),
        Ok(IngestOutcome::Invalid) => invalid_payload(),
        Ok(IngestOutcome::NotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(e) => {
            eprintln!("Ingest error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error").into_response()
        }
    }
}
