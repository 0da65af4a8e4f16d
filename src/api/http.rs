//! HTTP server setup with Axum
//!
//! The router is the dispatch table: (method, path) maps to exactly one
//! ingestion or metrics handler, with no business logic in the routing
//! itself. Variant path spellings from the older deployments are kept as
//! aliases of the canonical handlers.

use std::path::Path;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, Method, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::rest::{events, metrics, preflight};
use super::state::AppState;

/// Create the Axum router with all endpoints.
///
/// Unmatched paths fall through to the static asset directory; a path with
/// no matching file is the terminal 404.
pub fn create_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    // CORS header set applied uniformly, matching the preflight contract
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Static-asset collaborator: plain file serving with a terminal 404
    let assets = ServeDir::new(assets_dir).not_found_service(not_found.into_service());

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Ingestion routes (canonical + variant spellings)
        .route("/events/user", post(events::record_user).options(preflight))
        .route("/events/users", post(events::record_user).options(preflight))
        .route(
            "/events/paid-click",
            post(events::record_paid_click).options(preflight),
        )
        .route(
            "/events/paid-clicks",
            post(events::record_paid_click).options(preflight),
        )
        .route(
            "/events/last-scene",
            post(events::record_last_scene).options(preflight),
        )
        .route(
            "/events/update-user",
            post(events::update_user).options(preflight),
        )
        // Metrics routes
        .route(
            "/metrics/users/:user_id",
            get(metrics::user_presence).options(preflight),
        )
        .route("/metrics/users", get(metrics::users).options(preflight))
        .route(
            "/metrics/paid_clicks",
            get(metrics::paid_clicks).options(preflight),
        )
        .route(
            "/metrics/paid-clicks",
            get(metrics::paid_clicks).options(preflight),
        )
        .route(
            "/metrics/last_scenes",
            get(metrics::last_scenes).options(preflight),
        )
        .route(
            "/metrics/last-scene",
            get(metrics::last_scenes).options(preflight),
        )
        .fallback_service(assets)
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Terminal fallback when neither a route nor an asset matches
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EventStore;
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    fn test_router(temp_dir: &TempDir) -> Router {
        let store =
            Arc::new(EventStore::open(temp_dir.path().join("events.jsonl")).unwrap());
        let state = Arc::new(AppState::new(store));
        create_router(state, temp_dir.path())
    }

    #[tokio::test]
    async fn test_health_check() {
        let temp_dir = TempDir::new().unwrap();
        let app = test_router(&temp_dir);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_unmatched_path_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let app = test_router(&temp_dir);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no/such/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
    }
}
