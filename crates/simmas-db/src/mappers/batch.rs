//! Batch entity <-> model mapper

use simmas_core::entities::Batch;
use simmas_core::error::DomainError;
use simmas_core::value_objects::ProgramStatus;

use crate::models::BatchModel;

/// Convert BatchModel to Batch entity
///
/// Fails if the stored status string is not a known status (schema drift).
impl TryFrom<BatchModel> for Batch {
    type Error = DomainError;

    fn try_from(model: BatchModel) -> Result<Self, Self::Error> {
        let status: ProgramStatus = model.status.parse().map_err(|_| {
            DomainError::InternalError(format!("Unknown status in batch table: {}", model.status))
        })?;

        Ok(Batch {
            id: model.id,
            periode_id: model.periode_id,
            name: model.name,
            semester: model.semester,
            start_date: model.start_date,
            end_date: model.end_date,
            status,
            description: model.description,
            student_quota: model.student_quota,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
