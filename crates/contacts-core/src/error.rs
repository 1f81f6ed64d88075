//! Error types for contacts-core

use thiserror::Error;

use crate::contact::FieldError;

/// Main error type for contacts-core
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("validation failed: {}", format_field_errors(.0))]
    InvalidInput(Vec<FieldError>),

    #[error("a contact with this email already exists")]
    DuplicateEmail,

    #[error("contact not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for contacts-core
pub type Result<T> = std::result::Result<T, ContactError>;
