//! Batch database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the `batch` table
#[derive(Debug, Clone, FromRow)]
pub struct BatchModel {
    pub id: Uuid,
    pub periode_id: Uuid,
    pub name: String,
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub description: Option<String>,
    pub student_quota: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
