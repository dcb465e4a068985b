//! Batch service
//!
//! CRUD over student cohorts, gated by the route permission table.
//! Every batch belongs to a live period; names are unique per period.

use simmas_core::entities::{Batch, BatchFilter};
use simmas_core::value_objects::{Action, Role};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{BatchListQuery, BatchResponse, CreateBatchRequest, UpdateBatchRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::periode::filter_window;

const ROUTE: &str = "/dashboard/batch";

/// Batch service
pub struct BatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BatchService<'a> {
    /// Create a new BatchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List batches matching the query
    #[instrument(skip(self, query))]
    pub async fn list_batch(
        &self,
        caller_role: Role,
        query: BatchListQuery,
    ) -> ServiceResult<Vec<BatchResponse>> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let (limit, offset) = filter_window(query.page, query.limit);
        let filter = BatchFilter {
            search: query.search,
            status: query.status,
            periode_id: query.periode_id,
            limit: Some(limit),
            offset: Some(offset),
        };

        let batches = self.ctx.batch_repo().list(&filter).await?;
        Ok(batches.iter().map(BatchResponse::from).collect())
    }

    /// Get one batch by ID
    #[instrument(skip(self))]
    pub async fn get_batch(
        &self,
        caller_role: Role,
        batch_id: Uuid,
    ) -> ServiceResult<BatchResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let batch = self
            .ctx
            .batch_repo()
            .find_by_id(batch_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Batch", batch_id.to_string()))?;

        Ok(BatchResponse::from(&batch))
    }

    /// Create a batch inside a period
    #[instrument(skip(self, request), fields(periode_id = %request.periode_id))]
    pub async fn create_batch(
        &self,
        caller_role: Role,
        request: CreateBatchRequest,
    ) -> ServiceResult<BatchResponse> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Create)?;

        if request.start_date >= request.end_date {
            return Err(ServiceError::validation("End date must be after start date"));
        }

        // The owning period must be live
        self.ctx
            .periode_repo()
            .find_by_id(request.periode_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Periode", request.periode_id.to_string())
            })?;

        let mut batch = Batch::new(
            Uuid::new_v4(),
            request.periode_id,
            request.name,
            request.semester,
            request.start_date,
            request.end_date,
        );
        if let Some(status) = request.status {
            batch.status = status;
        }
        batch.description = request.description;
        batch.student_quota = request.student_quota;

        // Duplicate names within the period surface as a unique violation
        self.ctx.batch_repo().create(&batch).await?;

        info!(batch_id = %batch.id, "Batch created");
        Ok(BatchResponse::from(&batch))
    }

    /// Update a batch
    #[instrument(skip(self, request))]
    pub async fn update_batch(
        &self,
        caller_role: Role,
        batch_id: Uuid,
        request: UpdateBatchRequest,
    ) -> ServiceResult<BatchResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::Edit)?;

        let mut batch = self
            .ctx
            .batch_repo()
            .find_by_id(batch_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Batch", batch_id.to_string()))?;

        if let Some(name) = request.name {
            batch.name = name;
        }
        if let Some(semester) = request.semester {
            batch.semester = semester;
        }
        if let Some(start_date) = request.start_date {
            batch.start_date = start_date;
        }
        if let Some(end_date) = request.end_date {
            batch.end_date = end_date;
        }
        if let Some(status) = request.status {
            batch.status = status;
        }
        if let Some(description) = request.description {
            batch.description = Some(description);
        }
        if let Some(student_quota) = request.student_quota {
            batch.student_quota = Some(student_quota);
        }

        if batch.start_date >= batch.end_date {
            return Err(ServiceError::validation("End date must be after start date"));
        }

        self.ctx.batch_repo().update(&batch).await?;

        info!(batch_id = %batch_id, "Batch updated");
        Ok(BatchResponse::from(&batch))
    }

    /// Soft delete a batch
    #[instrument(skip(self))]
    pub async fn delete_batch(&self, caller_role: Role, batch_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Delete)?;

        self.ctx.batch_repo().delete(batch_id).await?;

        info!(batch_id = %batch_id, "Batch deleted");
        Ok(())
    }
}
