//! Periode service
//!
//! CRUD over internship periods, gated by the route permission table.
//! One live period per academic year; a period with active batches
//! cannot be deleted.

use chrono::NaiveDate;
use simmas_core::entities::{Periode, PeriodeFilter};
use simmas_core::value_objects::{Action, Role};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreatePeriodeRequest, PeriodeListQuery, PeriodeResponse, UpdatePeriodeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const ROUTE: &str = "/dashboard/periode";

const DEFAULT_PAGE_SIZE: i64 = 100;
const MAX_PAGE_SIZE: i64 = 500;

fn ensure_date_order(start: NaiveDate, end: NaiveDate) -> ServiceResult<()> {
    if start >= end {
        return Err(ServiceError::validation("End date must be after start date"));
    }
    Ok(())
}

pub(crate) fn filter_window(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let page = page.unwrap_or(1).max(1);
    (limit, (page - 1) * limit)
}

/// Periode service
pub struct PeriodeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PeriodeService<'a> {
    /// Create a new PeriodeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List periods matching the query
    #[instrument(skip(self, query))]
    pub async fn list_periode(
        &self,
        caller_role: Role,
        query: PeriodeListQuery,
    ) -> ServiceResult<Vec<PeriodeResponse>> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let (limit, offset) = filter_window(query.page, query.limit);
        let filter = PeriodeFilter {
            search: query.search,
            status: query.status,
            limit: Some(limit),
            offset: Some(offset),
        };

        let periods = self.ctx.periode_repo().list(&filter).await?;
        Ok(periods.iter().map(PeriodeResponse::from).collect())
    }

    /// Get one period by ID
    #[instrument(skip(self))]
    pub async fn get_periode(
        &self,
        caller_role: Role,
        periode_id: Uuid,
    ) -> ServiceResult<PeriodeResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let periode = self
            .ctx
            .periode_repo()
            .find_by_id(periode_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Periode", periode_id.to_string()))?;

        Ok(PeriodeResponse::from(&periode))
    }

    /// Create an internship period
    #[instrument(skip(self, request), fields(academic_year = %request.academic_year))]
    pub async fn create_periode(
        &self,
        caller_role: Role,
        request: CreatePeriodeRequest,
    ) -> ServiceResult<PeriodeResponse> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Create)?;

        ensure_date_order(request.start_date, request.end_date)?;

        if self
            .ctx
            .periode_repo()
            .academic_year_exists(&request.academic_year)
            .await?
        {
            return Err(ServiceError::conflict("Academic year already exists"));
        }

        let mut periode = Periode::new(
            Uuid::new_v4(),
            request.name,
            request.academic_year,
            request.start_date,
            request.end_date,
        );
        if let Some(status) = request.status {
            periode.status = status;
        }
        periode.description = request.description;
        periode.target_students = request.target_students;

        self.ctx.periode_repo().create(&periode).await?;

        info!(periode_id = %periode.id, "Period created");
        Ok(PeriodeResponse::from(&periode))
    }

    /// Update an internship period
    #[instrument(skip(self, request))]
    pub async fn update_periode(
        &self,
        caller_role: Role,
        periode_id: Uuid,
        request: UpdatePeriodeRequest,
    ) -> ServiceResult<PeriodeResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::Edit)?;

        let mut periode = self
            .ctx
            .periode_repo()
            .find_by_id(periode_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Periode", periode_id.to_string()))?;

        if let Some(academic_year) = request.academic_year {
            if !academic_year.eq_ignore_ascii_case(&periode.academic_year)
                && self
                    .ctx
                    .periode_repo()
                    .academic_year_exists(&academic_year)
                    .await?
            {
                return Err(ServiceError::conflict("Academic year already exists"));
            }
            periode.academic_year = academic_year;
        }
        if let Some(name) = request.name {
            periode.name = name;
        }
        if let Some(start_date) = request.start_date {
            periode.start_date = start_date;
        }
        if let Some(end_date) = request.end_date {
            periode.end_date = end_date;
        }
        if let Some(status) = request.status {
            periode.status = status;
        }
        if let Some(description) = request.description {
            periode.description = Some(description);
        }
        if let Some(target_students) = request.target_students {
            periode.target_students = Some(target_students);
        }

        // The patched range must still be ordered
        ensure_date_order(periode.start_date, periode.end_date)?;

        self.ctx.periode_repo().update(&periode).await?;

        info!(periode_id = %periode_id, "Period updated");
        Ok(PeriodeResponse::from(&periode))
    }

    /// Soft delete an internship period
    ///
    /// Refused while the period still has active batches.
    #[instrument(skip(self))]
    pub async fn delete_periode(&self, caller_role: Role, periode_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Delete)?;

        let active_batches = self.ctx.batch_repo().count_active(periode_id).await?;
        if active_batches > 0 {
            return Err(ServiceError::validation(format!(
                "Cannot delete a period with {active_batches} active batch(es)"
            )));
        }

        self.ctx.periode_repo().delete(periode_id).await?;

        info!(periode_id = %periode_id, "Period deleted");
        Ok(())
    }
}
