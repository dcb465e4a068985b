//! User administration service
//!
//! CRUD over user accounts, gated by the route permission table.
//! The caller's role comes from the verified access token claims.

use simmas_common::auth::{hash_password, validate_password_strength};
use simmas_core::entities::{normalize_email, User};
use simmas_core::value_objects::{Action, Role};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const ROUTE: &str = "/dashboard/users";

/// User administration service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self, caller_role: Role) -> ServiceResult<Vec<UserResponse>> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get one user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, caller_role: Role, user_id: Uuid) -> ServiceResult<UserResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Create a user account with an explicit role
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_user(
        &self,
        caller_role: Role,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Create)?;

        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let email = normalize_email(&request.email);
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut user = User::new(Uuid::new_v4(), email, request.role);
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.phone = request.phone;

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(UserResponse::from(&user))
    }

    /// Update a user's role, profile fields, or verification flag
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        caller_role: Role,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::Edit)?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(verified) = request.verified {
            user.verified = verified;
        }
        user.update_profile(request.first_name, request.last_name, request.phone);

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "User updated");
        Ok(UserResponse::from(&user))
    }

    /// Soft delete a user and revoke all their sessions
    #[instrument(skip(self))]
    pub async fn delete_user(&self, caller_role: Role, user_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Delete)?;

        self.ctx.user_repo().delete(user_id).await?;

        // A deleted account must not keep refreshing
        self.ctx
            .refresh_token_repo()
            .revoke_all_for_user(user_id)
            .await?;

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
