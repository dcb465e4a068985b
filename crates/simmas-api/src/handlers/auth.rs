//! Authentication handlers
//!
//! Endpoints for registration, login, token refresh, logout, and the
//! account pages (profile, password, sessions). The refresh token lives
//! in an httpOnly cookie; the handlers here are the only place it is
//! read or written.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use simmas_common::AppError;
use simmas_service::dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RefreshResponse, RegisterRequest,
    SessionResponse, UpdateProfileRequest, UserResponse,
};
use simmas_service::AuthService;

use crate::cookies;
use crate::extractors::{AuthUser, ExtractClientInfo, SessionIdPath, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ExtractClientInfo(client_info): ExtractClientInfo,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Created<ApiJson<AuthResponse>>)> {
    let service = AuthService::new(state.service_context());
    let outcome = service.register(request, &client_info).await?;

    let jar = jar.add(cookies::refresh_cookie(
        outcome.refresh_token,
        state.config(),
    ));
    Ok((jar, Created(ApiJson::new(outcome.response))))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ExtractClientInfo(client_info): ExtractClientInfo,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, ApiJson<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let outcome = service.login(request, &client_info).await?;

    let jar = jar.add(cookies::refresh_cookie(
        outcome.refresh_token,
        state.config(),
    ));
    Ok((jar, ApiJson::new(outcome.response)))
}

/// Exchange the refresh token cookie for a new access token
///
/// POST /api/auth/refresh
///
/// Success rotates the cookie; any failure deletes it so the client
/// stops retrying a dead session.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    ExtractClientInfo(client_info): ExtractClientInfo,
) -> Response {
    let Some(cookie) = jar.get(cookies::REFRESH_COOKIE) else {
        let jar = jar.add(cookies::clear_refresh_cookie(state.config()));
        return (jar, ApiError::App(AppError::InvalidToken)).into_response();
    };
    let token = cookie.value().to_string();

    let service = AuthService::new(state.service_context());
    match service.refresh(&token, &client_info).await {
        Ok(outcome) => {
            let body = RefreshResponse {
                access_token: outcome.response.access_token,
            };
            let jar = jar.add(cookies::refresh_cookie(
                outcome.refresh_token,
                state.config(),
            ));
            (jar, ApiJson::new(body)).into_response()
        }
        Err(e) => {
            let jar = jar.add(cookies::clear_refresh_cookie(state.config()));
            (jar, ApiError::from(e)).into_response()
        }
    }
}

/// Logout by revoking the refresh token cookie
///
/// POST /api/auth/logout
///
/// Always succeeds: the cookie is cleared whether or not revocation
/// found a live token.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, ApiJson<serde_json::Value>)> {
    let token = jar
        .get(cookies::REFRESH_COOKIE)
        .map(|c| c.value().to_string());

    let service = AuthService::new(state.service_context());
    service.logout(token.as_deref()).await?;

    let jar = jar.add(cookies::clear_refresh_cookie(state.config()));
    Ok((
        jar,
        ApiJson::with_message(serde_json::Value::Null, "Logout successful"),
    ))
}

/// Logout from every device
///
/// POST /api/auth/logout-all
pub async fn logout_all(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, ApiJson<serde_json::Value>)> {
    let service = AuthService::new(state.service_context());
    let revoked = service.logout_all(auth.user_id).await?;

    let jar = jar.add(cookies::clear_refresh_cookie(state.config()));
    Ok((
        jar,
        ApiJson::with_message(
            serde_json::json!({ "revokedSessions": revoked }),
            "Logged out from all devices",
        ),
    ))
}

/// Get the current user's profile
///
/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let user = service.me(auth.user_id).await?;
    Ok(ApiJson::new(user))
}

/// Update the current user's profile
///
/// PATCH /api/auth/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let user = service.update_profile(auth.user_id, request).await?;
    Ok(ApiJson::new(user))
}

/// Change password; every session is revoked afterwards
///
/// POST /api/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<(CookieJar, ApiJson<serde_json::Value>)> {
    let service = AuthService::new(state.service_context());
    service.change_password(auth.user_id, request).await?;

    let jar = jar.add(cookies::clear_refresh_cookie(state.config()));
    Ok((
        jar,
        ApiJson::with_message(serde_json::Value::Null, "Password changed"),
    ))
}

/// List active sessions for the current user
///
/// GET /api/auth/sessions
pub async fn sessions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<SessionResponse>>> {
    let service = AuthService::new(state.service_context());
    let sessions = service.sessions(auth.user_id).await?;
    Ok(ApiJson::new(sessions))
}

/// Revoke one of the current user's sessions
///
/// DELETE /api/auth/sessions/:session_id
pub async fn revoke_session(
    State(state): State<AppState>,
    auth: AuthUser,
    axum::extract::Path(path): axum::extract::Path<SessionIdPath>,
) -> ApiResult<NoContent> {
    let session_id = path.session_id()?;

    let service = AuthService::new(state.service_context());
    service.revoke_session(auth.user_id, session_id).await?;
    Ok(NoContent)
}
