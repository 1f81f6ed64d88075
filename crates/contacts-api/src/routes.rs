//! Route definitions
//!
//! Defines all HTTP API endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{create_contact, delete_contact, health, list_contacts, update_contact};
use crate::server::AppState;

/// Create the API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Contact collection
        .route("/contacts", get(list_contacts).post(create_contact))
        // Single contact
        .route("/contacts/{id}", put(update_contact).delete(delete_contact))
}
