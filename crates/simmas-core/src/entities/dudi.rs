//! DUDI entity - a partner company hosting internships
//!
//! DUDI (Dunia Usaha dan Dunia Industri) is the registry of companies that
//! accept student interns.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A partner company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dudi {
    pub id: Uuid,
    /// Company name, unique across the registry
    pub company_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Contact person responsible for interns at the company
    pub contact_person: String,
    pub business_field: Option<String>,
    /// How many students the company accepts per period
    pub student_quota: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dudi {
    /// Create a new active company with required fields
    #[must_use]
    pub fn new(id: Uuid, company_name: String, address: String, contact_person: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            company_name,
            address,
            phone: None,
            email: None,
            contact_person,
            business_field: None,
            student_quota: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the company can currently take placements
    #[inline]
    #[must_use]
    pub fn accepts_interns(&self) -> bool {
        self.active && self.student_quota.is_none_or(|quota| quota > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_interns() {
        let mut dudi = Dudi::new(
            Uuid::new_v4(),
            "PT Maju Jaya".to_string(),
            "Jl. Sudirman 1".to_string(),
            "Budi".to_string(),
        );
        assert!(dudi.accepts_interns());

        dudi.student_quota = Some(0);
        assert!(!dudi.accepts_interns());

        dudi.student_quota = Some(5);
        dudi.active = false;
        assert!(!dudi.accepts_interns());
    }
}
