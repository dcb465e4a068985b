//! DUDI service
//!
//! CRUD over partner companies (Dunia Usaha dan Dunia Industri),
//! gated by the route permission table.

use simmas_core::entities::Dudi;
use simmas_core::value_objects::{Action, Role};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateDudiRequest, DudiResponse, UpdateDudiRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const ROUTE: &str = "/dashboard/dudi";

/// DUDI service
pub struct DudiService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DudiService<'a> {
    /// Create a new DudiService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all partner companies
    #[instrument(skip(self))]
    pub async fn list_dudi(&self, caller_role: Role) -> ServiceResult<Vec<DudiResponse>> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let companies = self.ctx.dudi_repo().list().await?;
        Ok(companies.iter().map(DudiResponse::from).collect())
    }

    /// Get one company by ID
    #[instrument(skip(self))]
    pub async fn get_dudi(&self, caller_role: Role, dudi_id: Uuid) -> ServiceResult<DudiResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::View)?;

        let dudi = self
            .ctx
            .dudi_repo()
            .find_by_id(dudi_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Dudi", dudi_id.to_string()))?;

        Ok(DudiResponse::from(&dudi))
    }

    /// Register a partner company
    #[instrument(skip(self, request), fields(company = %request.company_name))]
    pub async fn create_dudi(
        &self,
        caller_role: Role,
        request: CreateDudiRequest,
    ) -> ServiceResult<DudiResponse> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Create)?;

        if self
            .ctx
            .dudi_repo()
            .name_exists(&request.company_name)
            .await?
        {
            return Err(ServiceError::conflict("Company name already registered"));
        }

        let mut dudi = Dudi::new(
            Uuid::new_v4(),
            request.company_name,
            request.address,
            request.contact_person,
        );
        dudi.phone = request.phone;
        dudi.email = request.email;
        dudi.business_field = request.business_field;
        dudi.student_quota = request.student_quota;
        if let Some(active) = request.active {
            dudi.active = active;
        }

        self.ctx.dudi_repo().create(&dudi).await?;

        info!(dudi_id = %dudi.id, "Company registered");
        Ok(DudiResponse::from(&dudi))
    }

    /// Update a partner company
    #[instrument(skip(self, request))]
    pub async fn update_dudi(
        &self,
        caller_role: Role,
        dudi_id: Uuid,
        request: UpdateDudiRequest,
    ) -> ServiceResult<DudiResponse> {
        self.ctx.ensure_permission(ROUTE, caller_role, Action::Edit)?;

        let mut dudi = self
            .ctx
            .dudi_repo()
            .find_by_id(dudi_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Dudi", dudi_id.to_string()))?;

        if let Some(company_name) = request.company_name {
            if company_name != dudi.company_name
                && self.ctx.dudi_repo().name_exists(&company_name).await?
            {
                return Err(ServiceError::conflict("Company name already registered"));
            }
            dudi.company_name = company_name;
        }
        if let Some(address) = request.address {
            dudi.address = address;
        }
        if let Some(phone) = request.phone {
            dudi.phone = Some(phone);
        }
        if let Some(email) = request.email {
            dudi.email = Some(email);
        }
        if let Some(contact_person) = request.contact_person {
            dudi.contact_person = contact_person;
        }
        if let Some(business_field) = request.business_field {
            dudi.business_field = Some(business_field);
        }
        if let Some(student_quota) = request.student_quota {
            dudi.student_quota = Some(student_quota);
        }
        if let Some(active) = request.active {
            dudi.active = active;
        }

        self.ctx.dudi_repo().update(&dudi).await?;

        info!(dudi_id = %dudi_id, "Company updated");
        Ok(DudiResponse::from(&dudi))
    }

    /// Soft delete a partner company
    #[instrument(skip(self))]
    pub async fn delete_dudi(&self, caller_role: Role, dudi_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .ensure_permission(ROUTE, caller_role, Action::Delete)?;

        self.ctx.dudi_repo().delete(dudi_id).await?;

        info!(dudi_id = %dudi_id, "Company deleted");
        Ok(())
    }
}
