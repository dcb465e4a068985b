//! Batch entity - a cohort of students placed within a period
//!
//! Each batch belongs to exactly one periode; the batch name is unique
//! among the live batches of its periode.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::value_objects::ProgramStatus;

/// A student cohort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub id: Uuid,
    pub periode_id: Uuid,
    pub name: String,
    /// Semester label, e.g. "Ganjil" or "Genap"
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProgramStatus,
    pub description: Option<String>,
    /// How many students the batch can take
    pub student_quota: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Batch {
    /// Create a new draft batch with required fields
    #[must_use]
    pub fn new(
        id: Uuid,
        periode_id: Uuid,
        name: String,
        semester: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            periode_id,
            name,
            semester,
            start_date,
            end_date,
            status: ProgramStatus::default(),
            description: None,
            student_quota: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether students can currently be placed into the batch
    #[inline]
    #[must_use]
    pub fn accepts_students(&self) -> bool {
        self.status == ProgramStatus::Active && self.student_quota.is_none_or(|quota| quota > 0)
    }
}

/// Filter for the batch listing; `None` fields leave that dimension open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchFilter {
    /// Case-insensitive substring match on name, semester, or description
    pub search: Option<String>,
    pub status: Option<ProgramStatus>,
    /// Restrict to the batches of one period
    pub periode_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
