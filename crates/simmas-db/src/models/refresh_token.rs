//! Refresh token database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Join row for token validation: the token columns plus the owning user
///
/// Column aliases keep the two `id`/`created_at` pairs apart.
#[derive(Debug, Clone, FromRow)]
pub struct ValidatedTokenRow {
    pub token_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub verified: bool,
    pub user_created_at: DateTime<Utc>,
    pub user_updated_at: DateTime<Utc>,
}

/// Projection for the active-sessions listing (no token material)
#[derive(Debug, Clone, FromRow)]
pub struct SessionInfoModel {
    pub id: Uuid,
    pub device_info: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}
