//! HTTP API Server
//!
//! Starts and manages the axum-based HTTP server.

use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tracing::info;

use contacts_core::ContactStore;

use crate::routes::routes;

/// Shared application state
///
/// The store is opened once at startup and shared across handlers; each
/// handler holds the lock only for the duration of one synchronous
/// storage call and never across an await.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ContactStore>>,
}

impl AppState {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Start the HTTP API server
pub async fn start_server(port: u16, store: ContactStore) -> anyhow::Result<()> {
    let state = AppState::new(store);

    // The API is consumed cross-origin by the browser client
    let app = Router::new()
        .merge(routes())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("HTTP API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
