//! Periode entity <-> model mapper

use simmas_core::entities::Periode;
use simmas_core::error::DomainError;
use simmas_core::value_objects::ProgramStatus;

use crate::models::PeriodeModel;

/// Convert PeriodeModel to Periode entity
///
/// Fails if the stored status string is not a known status (schema drift).
impl TryFrom<PeriodeModel> for Periode {
    type Error = DomainError;

    fn try_from(model: PeriodeModel) -> Result<Self, Self::Error> {
        let status: ProgramStatus = model.status.parse().map_err(|_| {
            DomainError::InternalError(format!(
                "Unknown status in periode table: {}",
                model.status
            ))
        })?;

        Ok(Periode {
            id: model.id,
            name: model.name,
            academic_year: model.academic_year,
            start_date: model.start_date,
            end_date: model.end_date,
            status,
            description: model.description,
            target_students: model.target_students,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
