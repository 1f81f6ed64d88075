//! Contact domain: record types, validation rules, and persistence

mod store;
mod types;
mod validate;

pub use store::ContactStore;
pub use types::{Contact, ContactDraft, ContactPatch};
pub use validate::{validate, FieldError, ValidationResult};
