//! Dudi entity <-> model mapper

use simmas_core::entities::Dudi;

use crate::models::DudiModel;

impl From<DudiModel> for Dudi {
    fn from(model: DudiModel) -> Self {
        Dudi {
            id: model.id,
            company_name: model.company_name,
            address: model.address,
            phone: model.phone,
            email: model.email,
            contact_person: model.contact_person,
            business_field: model.business_field,
            student_quota: model.student_quota,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
