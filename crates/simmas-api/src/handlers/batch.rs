//! Batch handlers
//!
//! CRUD endpoints over student cohorts. The listing accepts
//! search/status/periodeId/page/limit query parameters.

use axum::extract::{Path, Query, State};
use simmas_service::dto::{BatchListQuery, BatchResponse, CreateBatchRequest, UpdateBatchRequest};
use simmas_service::BatchService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List batches
///
/// GET /api/batch?search=&status=&periodeId=&page=&limit=
pub async fn list_batch(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<BatchListQuery>,
) -> ApiResult<ApiJson<Vec<BatchResponse>>> {
    let service = BatchService::new(state.service_context());
    let batches = service.list_batch(auth.role, query).await?;
    Ok(ApiJson::new(batches))
}

/// Get one batch
///
/// GET /api/batch/:id
pub async fn get_batch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<ApiJson<BatchResponse>> {
    let batch_id = path.id()?;

    let service = BatchService::new(state.service_context());
    let batch = service.get_batch(auth.role, batch_id).await?;
    Ok(ApiJson::new(batch))
}

/// Create a batch
///
/// POST /api/batch
pub async fn create_batch(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBatchRequest>,
) -> ApiResult<Created<ApiJson<BatchResponse>>> {
    let service = BatchService::new(state.service_context());
    let batch = service.create_batch(auth.role, request).await?;
    Ok(Created(ApiJson::new(batch)))
}

/// Update a batch
///
/// PATCH /api/batch/:id
pub async fn update_batch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateBatchRequest>,
) -> ApiResult<ApiJson<BatchResponse>> {
    let batch_id = path.id()?;

    let service = BatchService::new(state.service_context());
    let batch = service.update_batch(auth.role, batch_id, request).await?;
    Ok(ApiJson::new(batch))
}

/// Soft delete a batch
///
/// DELETE /api/batch/:id
pub async fn delete_batch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let batch_id = path.id()?;

    let service = BatchService::new(state.service_context());
    service.delete_batch(auth.role, batch_id).await?;
    Ok(NoContent)
}
