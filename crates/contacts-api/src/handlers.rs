//! HTTP API handlers
//!
//! Request handlers for contact CRUD operations. Payloads deserialize
//! into typed candidates, the store does the authoritative validation,
//! and every failure path goes through the shared error mapping.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use contacts_core::{Contact, ContactDraft, ContactPatch};

use crate::error::{error_response, ErrorResponse};
use crate::server::AppState;

/// Delete confirmation payload
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// List all contacts, most recently created first
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().unwrap();
    store.list().map(Json).map_err(error_response)
}

/// Create a contact
pub async fn create_contact(
    State(state): State<AppState>,
    Json(draft): Json<ContactDraft>,
) -> Result<(StatusCode, Json<Contact>), (StatusCode, Json<ErrorResponse>)> {
    debug!("Create contact request: {}", draft.email);

    let store = state.store.lock().unwrap();
    match store.create(draft) {
        Ok(contact) => {
            info!("Created contact: {}", contact.id);
            Ok((StatusCode::CREATED, Json(contact)))
        }
        Err(e) => Err(error_response(e)),
    }
}

/// Apply a partial update to a contact
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ContactPatch>,
) -> Result<Json<Contact>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Update contact request: {}", id);

    let store = state.store.lock().unwrap();
    match store.update(&id, patch) {
        Ok(contact) => {
            info!("Updated contact: {}", contact.id);
            Ok(Json(contact))
        }
        Err(e) => Err(error_response(e)),
    }
}

/// Delete a contact
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().unwrap();
    match store.delete(&id) {
        Ok(()) => {
            info!("Deleted contact: {}", id);
            Ok(Json(DeleteResponse {
                message: "Contact deleted successfully".to_string(),
            }))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use contacts_core::ContactStore;

    use crate::routes::routes;
    use crate::server::AppState;

    fn test_app() -> Router {
        let state = AppState::new(ContactStore::in_memory().unwrap());
        Router::new().merge(routes()).with_state(state)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));
        (status, value)
    }

    fn john() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@x.com",
            "phoneNumber": "1234567890"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".to_string()));
    }

    #[tokio::test]
    async fn test_end_to_end_crud_flow() {
        let app = test_app();

        // Create
        let (status, created) = send(&app, "POST", "/contacts", Some(john())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["firstName"], "John");
        assert!(created["createdAt"].is_string());

        // Newest contact listed first
        let (status, listed) = send(&app, "GET", "/contacts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["id"], Value::String(id.clone()));

        // Partial update leaves the other fields alone
        let (status, updated) = send(
            &app,
            "PUT",
            &format!("/contacts/{}", id),
            Some(json!({"firstName": "John Updated"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["firstName"], "John Updated");
        assert_eq!(updated["email"], "john@x.com");

        // Delete, then delete again
        let (status, deleted) = send(&app, "DELETE", &format!("/contacts/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["message"], "Contact deleted successfully");

        let (status, body) = send(&app, "DELETE", &format!("/contacts/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Contact not found");
    }

    #[tokio::test]
    async fn test_create_with_missing_fields_returns_message_list() {
        let app = test_app();

        let (status, body) = send(&app, "POST", "/contacts", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let messages = body["error"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], "First name is required");
    }

    #[tokio::test]
    async fn test_create_duplicate_email_returns_single_message() {
        let app = test_app();

        let (status, _) = send(&app, "POST", "/contacts", Some(john())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "POST", "/contacts", Some(john())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "A contact with this email already exists.");
    }

    #[tokio::test]
    async fn test_update_duplicate_email_returns_single_message() {
        let app = test_app();

        send(&app, "POST", "/contacts", Some(john())).await;
        let (_, other) = send(
            &app,
            "POST",
            "/contacts",
            Some(json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@x.com",
                "phoneNumber": "0987654321"
            })),
        )
        .await;
        let other_id = other["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/contacts/{}", other_id),
            Some(json!({"email": "john@x.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "A contact with this email already exists.");
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_404() {
        let app = test_app();

        let (status, body) = send(
            &app,
            "PUT",
            "/contacts/does-not-exist",
            Some(json!({"firstName": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Contact not found");
    }
}
