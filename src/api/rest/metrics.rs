//! Metrics endpoints
//!
//! Each listing endpoint serves the canonical dump shape by default and the
//! aggregate-count shape of the older deployments with `?shape=count`.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::ResultsBody;
use crate::api::state::AppState;
use crate::store::StorageError;
use crate::types::EventKind;

/// Query parameters for the listing endpoints
#[derive(Debug, Deserialize)]
pub struct ShapeParams {
    /// `count` selects the aggregate-count body; anything else (or absent)
    /// selects the full dump
    #[serde(default)]
    pub shape: Option<String>,
}

impl ShapeParams {
    fn wants_count(&self) -> bool {
        self.shape.as_deref() == Some("count")
    }
}

/// GET /metrics/users/:userId - presence check, empty body either way
pub async fn user_presence(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Response {
    match state.metrics.user_presence(&user_id) {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /metrics/users - NewUser dump, or `{"users": n}` with ?shape=count
pub async fn users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ShapeParams>,
) -> Response {
    if params.wants_count() {
        return match state.metrics.count(EventKind::NewUser) {
            Ok(n) => Json(json!({ "users": n })).into_response(),
            Err(e) => internal_error(e),
        };
    }

    match state.metrics.all_users() {
        Ok(results) => Json(ResultsBody { results }).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /metrics/paid_clicks - PaidClick dump, or `{"paidClicks": n}`
pub async fn paid_clicks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ShapeParams>,
) -> Response {
    if params.wants_count() {
        return match state.metrics.count(EventKind::PaidClick) {
            Ok(n) => Json(json!({ "paidClicks": n })).into_response(),
            Err(e) => internal_error(e),
        };
    }

    match state.metrics.all_paid_clicks() {
        Ok(results) => Json(ResultsBody { results }).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /metrics/last_scenes - LastScene dump, or `{"lastSceneUsers": n}`
pub async fn last_scenes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ShapeParams>,
) -> Response {
    if params.wants_count() {
        return match state.metrics.count(EventKind::ReachedLastScene) {
            Ok(n) => Json(json!({ "lastSceneUsers": n })).into_response(),
            Err(e) => internal_error(e),
        };
    }

    match state.metrics.all_last_scenes() {
        Ok(results) => Json(ResultsBody { results }).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Opaque 500; the storage detail stays in the server log.
fn internal_error(e: StorageError) -> Response {
    eprintln!("Metrics error: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
