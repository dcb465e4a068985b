//! DUDI (partner company) database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the `dudi` table
#[derive(Debug, Clone, FromRow)]
pub struct DudiModel {
    pub id: Uuid,
    pub company_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: String,
    pub business_field: Option<String>,
    pub student_quota: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
