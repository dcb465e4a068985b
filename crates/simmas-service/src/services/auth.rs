//! Authentication service
//!
//! Handles user registration, login, token refresh, logout, and the
//! account endpoints (profile, password, sessions).

use simmas_common::auth::{
    generate_refresh_token, hash_password, validate_password_strength, verify_password,
};
use simmas_core::entities::{normalize_email, ClientInfo, User};
use simmas_core::value_objects::Role;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    AuthOutcome, AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest,
    SessionResponse, UpdateProfileRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request, client_info), fields(email = %request.email))]
    pub async fn register(
        &self,
        request: RegisterRequest,
        client_info: &ClientInfo,
    ) -> ServiceResult<AuthOutcome> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Emails are stored and matched in canonical form
        let email = normalize_email(&request.email);

        // Check if email already exists
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user
        let mut user = User::new(Uuid::new_v4(), email, request.role.unwrap_or(Role::Siswa));
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.phone = request.phone;

        // Save to database
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_session(user, client_info).await
    }

    /// Login with email and password
    #[instrument(skip(self, request, client_info), fields(email = %request.email))]
    pub async fn login(
        &self,
        request: LoginRequest,
        client_info: &ClientInfo,
    ) -> ServiceResult<AuthOutcome> {
        let email = normalize_email(&request.email);

        // Find user by email; the error never says which half was wrong
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "Login failed: user not found");
                ServiceError::App(simmas_common::AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(simmas_common::AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(simmas_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_session(user, client_info).await
    }

    /// Exchange a refresh token for a new access token and a rotated
    /// refresh token
    #[instrument(skip(self, refresh_token, client_info))]
    pub async fn refresh(
        &self,
        refresh_token: &str,
        client_info: &ClientInfo,
    ) -> ServiceResult<AuthOutcome> {
        // Validate: present, unrevoked, unexpired, owner still live
        let validated = self
            .ctx
            .refresh_token_repo()
            .validate(refresh_token)
            .await?
            .ok_or(ServiceError::App(simmas_common::AppError::InvalidToken))?;

        // Rotate: exactly one concurrent caller wins the exchange
        let new_refresh_token = generate_refresh_token();
        self.ctx
            .refresh_token_repo()
            .rotate(refresh_token, &new_refresh_token, client_info)
            .await?;

        let access_token = self
            .ctx
            .jwt_service()
            .issue_access_token(&validated.user)
            .map_err(ServiceError::from)?;

        info!(user_id = %validated.user.id, "Tokens refreshed successfully");

        Ok(AuthOutcome {
            response: AuthResponse::new(UserResponse::from(&validated.user), access_token),
            refresh_token: new_refresh_token,
        })
    }

    /// Logout by revoking the presented refresh token
    ///
    /// Fail-soft: a missing, unknown, or already revoked token still
    /// produces a successful logout.
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, refresh_token: Option<&str>) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            if let Err(e) = self.ctx.refresh_token_repo().revoke(token).await {
                warn!(error = %e, "Logout revocation failed, continuing");
            }
        }

        info!("User logged out");
        Ok(())
    }

    /// Logout from all devices; returns the number of sessions revoked
    #[instrument(skip(self))]
    pub async fn logout_all(&self, user_id: Uuid) -> ServiceResult<u64> {
        let revoked = self
            .ctx
            .refresh_token_repo()
            .revoke_all_for_user(user_id)
            .await?;

        info!(user_id = %user_id, revoked, "All sessions revoked");
        Ok(revoked)
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Update the current user's profile fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        user.update_profile(request.first_name, request.last_name, request.phone);

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Profile updated");
        Ok(UserResponse::from(&user))
    }

    /// Change the current user's password and revoke every session
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_valid = verify_password(&request.current_password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user_id, "Password change failed: wrong current password");
            return Err(ServiceError::App(simmas_common::AppError::InvalidCredentials));
        }

        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .update_password(user_id, &new_hash)
            .await?;

        // A changed password invalidates every open session
        let revoked = self
            .ctx
            .refresh_token_repo()
            .revoke_all_for_user(user_id)
            .await?;

        info!(user_id = %user_id, revoked, "Password changed");
        Ok(())
    }

    /// List the current user's active sessions
    #[instrument(skip(self))]
    pub async fn sessions(&self, user_id: Uuid) -> ServiceResult<Vec<SessionResponse>> {
        let sessions = self
            .ctx
            .refresh_token_repo()
            .active_sessions(user_id)
            .await?;

        Ok(sessions.into_iter().map(SessionResponse::from).collect())
    }

    /// Revoke one of the current user's sessions by session id
    #[instrument(skip(self))]
    pub async fn revoke_session(&self, user_id: Uuid, session_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .refresh_token_repo()
            .revoke_by_id(session_id, user_id)
            .await?;

        info!(user_id = %user_id, session_id = %session_id, "Session revoked");
        Ok(())
    }

    /// Mark expired-but-unrevoked tokens revoked; returns how many
    #[instrument(skip(self))]
    pub async fn cleanup_expired_tokens(&self) -> ServiceResult<u64> {
        let cleaned = self.ctx.refresh_token_repo().cleanup_expired().await?;
        if cleaned > 0 {
            info!(cleaned, "Expired refresh tokens revoked");
        }
        Ok(cleaned)
    }

    async fn issue_session(
        &self,
        user: User,
        client_info: &ClientInfo,
    ) -> ServiceResult<AuthOutcome> {
        let access_token = self
            .ctx
            .jwt_service()
            .issue_access_token(&user)
            .map_err(ServiceError::from)?;

        let refresh_token = generate_refresh_token();
        self.ctx
            .refresh_token_repo()
            .create(user.id, &refresh_token, client_info)
            .await?;

        Ok(AuthOutcome {
            response: AuthResponse::new(UserResponse::from(&user), access_token),
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    // Covered end to end by the integration suite in tests/integration
}
