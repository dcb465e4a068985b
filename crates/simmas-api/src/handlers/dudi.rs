//! DUDI handlers
//!
//! CRUD endpoints over the partner company registry.

use axum::extract::{Path, State};
use simmas_service::dto::{CreateDudiRequest, DudiResponse, UpdateDudiRequest};
use simmas_service::DudiService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all partner companies
///
/// GET /api/dudi
pub async fn list_dudi(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<DudiResponse>>> {
    let service = DudiService::new(state.service_context());
    let companies = service.list_dudi(auth.role).await?;
    Ok(ApiJson::new(companies))
}

/// Get one company
///
/// GET /api/dudi/:id
pub async fn get_dudi(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<ApiJson<DudiResponse>> {
    let dudi_id = path.id()?;

    let service = DudiService::new(state.service_context());
    let dudi = service.get_dudi(auth.role, dudi_id).await?;
    Ok(ApiJson::new(dudi))
}

/// Register a partner company
///
/// POST /api/dudi
pub async fn create_dudi(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateDudiRequest>,
) -> ApiResult<Created<ApiJson<DudiResponse>>> {
    let service = DudiService::new(state.service_context());
    let dudi = service.create_dudi(auth.role, request).await?;
    Ok(Created(ApiJson::new(dudi)))
}

/// Update a company
///
/// PATCH /api/dudi/:id
pub async fn update_dudi(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateDudiRequest>,
) -> ApiResult<ApiJson<DudiResponse>> {
    let dudi_id = path.id()?;

    let service = DudiService::new(state.service_context());
    let dudi = service.update_dudi(auth.role, dudi_id, request).await?;
    Ok(ApiJson::new(dudi))
}

/// Soft delete a company
///
/// DELETE /api/dudi/:id
pub async fn delete_dudi(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let dudi_id = path.id()?;

    let service = DudiService::new(state.service_context());
    service.delete_dudi(auth.role, dudi_id).await?;
    Ok(NoContent)
}
