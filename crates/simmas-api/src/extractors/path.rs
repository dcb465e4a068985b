//! Path parameter extractors
//!
//! Type-safe extraction of UUID IDs from path parameters. IDs travel as
//! strings on the wire, so parse failures become a 400 instead of axum's
//! default rejection.

use uuid::Uuid;

use crate::response::ApiError;

/// Path parameters with id
#[derive(Debug, serde::Deserialize)]
pub struct IdPath {
    pub id: String,
}

impl IdPath {
    /// Parse id as Uuid
    pub fn id(&self) -> Result<Uuid, ApiError> {
        self.id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid id format"))
    }
}

/// Path parameters with session_id
#[derive(Debug, serde::Deserialize)]
pub struct SessionIdPath {
    pub session_id: String,
}

impl SessionIdPath {
    /// Parse session_id as Uuid
    pub fn session_id(&self) -> Result<Uuid, ApiError> {
        self.session_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid session_id format"))
    }
}
