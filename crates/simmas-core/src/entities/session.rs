//! Refresh-token session records
//!
//! One row per login session. Rows are never hard-deleted; revocation is a
//! timestamp so the table doubles as an audit trail.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::User;

/// Client metadata captured when a session is created or rotated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub device_info: Option<String>,
    pub ip_address: Option<String>,
}

impl ClientInfo {
    #[must_use]
    pub fn new(device_info: Option<String>, ip_address: Option<String>) -> Self {
        Self {
            device_info,
            ip_address,
        }
    }
}

/// A refresh token that passed validation, with its owning user hydrated
#[derive(Debug, Clone)]
pub struct ValidatedRefreshToken {
    pub token_id: Uuid,
    pub user: User,
}

/// Session summary for the account page (no token material exposed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub id: Uuid,
    pub device_info: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}
