//! Pulse Metrics - Binary Entry Point
//!
//! Loads configuration, opens the event store (replaying the journal), and
//! serves the HTTP API until Ctrl-C.

use std::sync::Arc;

use pulse_metrics::config::ServerConfig;
use pulse_metrics::store::EventStore;
use pulse_metrics::types::EventKind;
use pulse_metrics::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    let store = Arc::new(EventStore::open(&config.data_path)?);
    println!(
        "Loaded event journal: {} users, {} paid clicks, {} last-scene users.",
        store.count(EventKind::NewUser)?,
        store.count(EventKind::PaidClick)?,
        store.count(EventKind::ReachedLastScene)?
    );

    let state = Arc::new(AppState::new(store));
    let app = create_router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    println!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("Shutting down.");
}
