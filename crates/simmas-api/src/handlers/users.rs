//! User administration handlers
//!
//! CRUD endpoints over accounts. Authorization is role-based via the
//! permission table; the service layer performs the checks.

use axum::extract::{Path, State};
use simmas_service::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use simmas_service::UserService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all users
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users(auth.role).await?;
    Ok(ApiJson::new(users))
}

/// Get one user
///
/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<ApiJson<UserResponse>> {
    let user_id = path.id()?;

    let service = UserService::new(state.service_context());
    let user = service.get_user(auth.role, user_id).await?;
    Ok(ApiJson::new(user))
}

/// Create a user with an explicit role
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<ApiJson<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(auth.role, request).await?;
    Ok(Created(ApiJson::new(user)))
}

/// Update a user
///
/// PATCH /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let user_id = path.id()?;

    let service = UserService::new(state.service_context());
    let user = service.update_user(auth.role, user_id, request).await?;
    Ok(ApiJson::new(user))
}

/// Soft delete a user
///
/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let user_id = path.id()?;

    let service = UserService::new(state.service_context());
    service.delete_user(auth.role, user_id).await?;
    Ok(NoContent)
}
