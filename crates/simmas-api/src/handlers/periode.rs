//! Periode handlers
//!
//! CRUD endpoints over internship periods. The listing accepts
//! search/status/page/limit query parameters.

use axum::extract::{Path, Query, State};
use simmas_service::dto::{
    CreatePeriodeRequest, PeriodeListQuery, PeriodeResponse, UpdatePeriodeRequest,
};
use simmas_service::PeriodeService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List periods
///
/// GET /api/periode?search=&status=&page=&limit=
pub async fn list_periode(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PeriodeListQuery>,
) -> ApiResult<ApiJson<Vec<PeriodeResponse>>> {
    let service = PeriodeService::new(state.service_context());
    let periods = service.list_periode(auth.role, query).await?;
    Ok(ApiJson::new(periods))
}

/// Get one period
///
/// GET /api/periode/:id
pub async fn get_periode(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<ApiJson<PeriodeResponse>> {
    let periode_id = path.id()?;

    let service = PeriodeService::new(state.service_context());
    let periode = service.get_periode(auth.role, periode_id).await?;
    Ok(ApiJson::new(periode))
}

/// Create a period
///
/// POST /api/periode
pub async fn create_periode(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePeriodeRequest>,
) -> ApiResult<Created<ApiJson<PeriodeResponse>>> {
    let service = PeriodeService::new(state.service_context());
    let periode = service.create_periode(auth.role, request).await?;
    Ok(Created(ApiJson::new(periode)))
}

/// Update a period
///
/// PATCH /api/periode/:id
pub async fn update_periode(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePeriodeRequest>,
) -> ApiResult<ApiJson<PeriodeResponse>> {
    let periode_id = path.id()?;

    let service = PeriodeService::new(state.service_context());
    let periode = service.update_periode(auth.role, periode_id, request).await?;
    Ok(ApiJson::new(periode))
}

/// Soft delete a period
///
/// DELETE /api/periode/:id
pub async fn delete_periode(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let periode_id = path.id()?;

    let service = PeriodeService::new(state.service_context());
    service.delete_periode(auth.role, periode_id).await?;
    Ok(NoContent)
}
