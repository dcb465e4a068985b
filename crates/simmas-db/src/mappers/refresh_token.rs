//! Refresh token row mappers

use simmas_core::entities::{SessionInfo, User, ValidatedRefreshToken};
use simmas_core::error::DomainError;
use simmas_core::value_objects::Role;

use crate::models::{SessionInfoModel, ValidatedTokenRow};

/// Convert the token+user join row into a validated token carrying
/// the hydrated user entity.
impl TryFrom<ValidatedTokenRow> for ValidatedRefreshToken {
    type Error = DomainError;

    fn try_from(row: ValidatedTokenRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|_| DomainError::InternalError(format!("Unknown role in users table: {}", row.role)))?;

        Ok(ValidatedRefreshToken {
            token_id: row.token_id,
            user: User {
                id: row.user_id,
                email: row.email,
                role,
                first_name: row.first_name,
                last_name: row.last_name,
                phone: row.phone,
                verified: row.verified,
                created_at: row.user_created_at,
                updated_at: row.user_updated_at,
            },
        })
    }
}

impl From<SessionInfoModel> for SessionInfo {
    fn from(model: SessionInfoModel) -> Self {
        SessionInfo {
            id: model.id,
            device_info: model.device_info,
            ip_address: model.ip_address,
            created_at: model.created_at,
            last_used_at: model.last_used_at,
        }
    }
}
