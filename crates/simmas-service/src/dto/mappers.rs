//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use simmas_core::entities::{Batch, Dudi, Periode, SessionInfo, User};

use super::responses::{
    BatchResponse, DudiResponse, PeriodeResponse, SessionResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            verified: user.verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Session Mappers
// ============================================================================

impl From<&SessionInfo> for SessionResponse {
    fn from(session: &SessionInfo) -> Self {
        Self {
            id: session.id.to_string(),
            device_info: session.device_info.clone(),
            ip_address: session.ip_address.clone(),
            created_at: session.created_at,
            last_used_at: session.last_used_at,
        }
    }
}

impl From<SessionInfo> for SessionResponse {
    fn from(session: SessionInfo) -> Self {
        Self::from(&session)
    }
}

// ============================================================================
// DUDI Mappers
// ============================================================================

impl From<&Dudi> for DudiResponse {
    fn from(dudi: &Dudi) -> Self {
        Self {
            id: dudi.id.to_string(),
            company_name: dudi.company_name.clone(),
            address: dudi.address.clone(),
            phone: dudi.phone.clone(),
            email: dudi.email.clone(),
            contact_person: dudi.contact_person.clone(),
            business_field: dudi.business_field.clone(),
            student_quota: dudi.student_quota,
            active: dudi.active,
            created_at: dudi.created_at,
            updated_at: dudi.updated_at,
        }
    }
}

impl From<Dudi> for DudiResponse {
    fn from(dudi: Dudi) -> Self {
        Self::from(&dudi)
    }
}

// ============================================================================
// Periode / Batch Mappers
// ============================================================================

impl From<&Periode> for PeriodeResponse {
    fn from(periode: &Periode) -> Self {
        Self {
            id: periode.id.to_string(),
            name: periode.name.clone(),
            academic_year: periode.academic_year.clone(),
            start_date: periode.start_date,
            end_date: periode.end_date,
            status: periode.status,
            description: periode.description.clone(),
            target_students: periode.target_students,
            created_at: periode.created_at,
            updated_at: periode.updated_at,
        }
    }
}

impl From<Periode> for PeriodeResponse {
    fn from(periode: Periode) -> Self {
        Self::from(&periode)
    }
}

impl From<&Batch> for BatchResponse {
    fn from(batch: &Batch) -> Self {
        Self {
            id: batch.id.to_string(),
            periode_id: batch.periode_id.to_string(),
            name: batch.name.clone(),
            semester: batch.semester.clone(),
            start_date: batch.start_date,
            end_date: batch.end_date,
            status: batch.status,
            description: batch.description.clone(),
            student_quota: batch.student_quota,
            created_at: batch.created_at,
            updated_at: batch.updated_at,
        }
    }
}

impl From<Batch> for BatchResponse {
    fn from(batch: Batch) -> Self {
        Self::from(&batch)
    }
}
