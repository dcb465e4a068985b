//! Wire types for the SIMMAS HTTP API
//!
//! These mirror the server's camelCase DTOs without pulling the server
//! crates (and their database stack) into the client.

use serde::{Deserialize, Serialize};

/// Success envelope: `{"success": true, "data": ..., "message"?: ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[allow(dead_code)]
    pub success: bool,
    pub data: T,
}

/// Failure envelope: `{"success": false, "error": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// A user profile as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub verified: bool,
}

/// Body of `POST /api/auth/login` and `POST /api/auth/register` responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthData {
    pub user: UserProfile,
    pub access_token: String,
}

/// Body of `POST /api/auth/refresh` responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshData {
    pub access_token: String,
}

/// Body of `POST /api/auth/logout-all` responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LogoutAllData {
    pub revoked_sessions: u64,
}

/// Payload for `POST /api/auth/register`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
