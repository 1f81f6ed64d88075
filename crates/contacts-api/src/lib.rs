//! contacts-api: HTTP surface for the contacts service
//!
//! Routes, handlers, and error mapping over the contacts-core store.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ErrorBody, ErrorResponse};
pub use routes::routes;
pub use server::{start_server, AppState};
