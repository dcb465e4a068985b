//! Periode entity - an internship period in the academic calendar
//!
//! A periode spans one academic year and groups the batches that run
//! inside it.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::value_objects::ProgramStatus;

/// An internship period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Periode {
    pub id: Uuid,
    pub name: String,
    /// Academic year label, e.g. "2025/2026"; unique among live periods
    pub academic_year: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProgramStatus,
    pub description: Option<String>,
    /// Planned number of student placements across the period
    pub target_students: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Periode {
    /// Create a new draft period with required fields
    #[must_use]
    pub fn new(
        id: Uuid,
        name: String,
        academic_year: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            academic_year,
            start_date,
            end_date,
            status: ProgramStatus::default(),
            description: None,
            target_students: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a calendar date falls inside the period (inclusive)
    #[inline]
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Filter for the period listing; `None` fields leave that dimension open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodeFilter {
    /// Case-insensitive substring match on name, academic year, or description
    pub search: Option<String>,
    pub status: Option<ProgramStatus>,
    /// Page size; rows beyond it are cut off
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
