//! contacts-core: Contacts Service Core Library
//!
//! Domain types, validation rules, and the SQLite-backed contact store
//! shared by the HTTP API and the server binary.

pub mod config;
pub mod contact;
pub mod error;

pub use config::{ApiConfig, Config, StorageConfig};
pub use contact::{
    validate, Contact, ContactDraft, ContactPatch, ContactStore, FieldError, ValidationResult,
};
pub use error::{ContactError, Result};
