//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and client metadata.

mod auth;
mod client_info;
mod path;
mod validated;

pub use auth::AuthUser;
pub use client_info::ExtractClientInfo;
pub use path::{IdPath, SessionIdPath};
pub use validated::ValidatedJson;
