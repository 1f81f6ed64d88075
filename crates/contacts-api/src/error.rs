//! Error responses
//!
//! Maps the core error taxonomy onto HTTP status codes and the
//! `{"error": message | [messages]}` body the client consumes. Internal
//! persistence errors never leak details past this boundary.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use contacts_core::ContactError;

/// Generic API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error payload: a single message, or one message per failed field rule
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Message(String),
    Messages(Vec<String>),
}

impl ErrorResponse {
    pub fn message(msg: &str) -> Self {
        Self {
            error: ErrorBody::Message(msg.to_string()),
        }
    }

    pub fn messages(msgs: Vec<String>) -> Self {
        Self {
            error: ErrorBody::Messages(msgs),
        }
    }
}

/// Translate a core error into a status code and response body
pub fn error_response(err: ContactError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ContactError::InvalidInput(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::messages(
                errors.into_iter().map(|e| e.message).collect(),
            )),
        ),
        ContactError::DuplicateEmail => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message(
                "A contact with this email already exists.",
            )),
        ),
        ContactError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::message("Contact not found")),
        ),
        other => {
            error!("Storage error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::message("Server error occurred")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::{validate, ContactDraft};

    #[test]
    fn test_invalid_input_maps_to_400_with_message_list() {
        let err = validate(&ContactDraft::default()).into_result().unwrap_err();
        let (status, Json(body)) = error_response(err);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["error"].is_array());
        assert_eq!(json["error"][0], "First name is required");
    }

    #[test]
    fn test_duplicate_email_maps_to_400_with_single_message() {
        let (status, Json(body)) = error_response(ContactError::DuplicateEmail);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "A contact with this email already exists.");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, _) = error_response(ContactError::NotFound("x".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_errors_map_to_generic_500() {
        let err = ContactError::Config("bad port".to_string());
        let (status, Json(body)) = error_response(err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Server error occurred");
    }
}
