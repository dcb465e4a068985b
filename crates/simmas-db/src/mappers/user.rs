//! User entity <-> model mapper

use simmas_core::entities::User;
use simmas_core::error::DomainError;
use simmas_core::value_objects::Role;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Fails if the stored role string is not a known role (schema drift).
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: Role = model
            .role
            .parse()
            .map_err(|_| DomainError::InternalError(format!("Unknown role in users table: {}", model.role)))?;

        Ok(User {
            id: model.id,
            email: model.email,
            role,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            verified: model.verified,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
