//! PostgreSQL implementation of DudiRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use simmas_core::entities::Dudi;
use simmas_core::error::DomainError;
use simmas_core::traits::{DudiRepository, RepoResult};

use crate::models::DudiModel;

use super::error::{dudi_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of DudiRepository
#[derive(Clone)]
pub struct PgDudiRepository {
    pool: PgPool,
}

impl PgDudiRepository {
    /// Create a new PgDudiRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DudiRepository for PgDudiRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Dudi>> {
        let result = sqlx::query_as::<_, DudiModel>(
            r"
            SELECT id, company_name, address, phone, email, contact_person, business_field,
                   student_quota, active, created_at, updated_at, deleted_at
            FROM dudi
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Dudi::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Dudi>> {
        let rows = sqlx::query_as::<_, DudiModel>(
            r"
            SELECT id, company_name, address, phone, email, contact_person, business_field,
                   student_quota, active, created_at, updated_at, deleted_at
            FROM dudi
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Dudi::from).collect())
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, company_name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM dudi WHERE company_name = $1 AND deleted_at IS NULL)
            ",
        )
        .bind(company_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, dudi: &Dudi) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO dudi (id, company_name, address, phone, email, contact_person,
                              business_field, student_quota, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(dudi.id)
        .bind(&dudi.company_name)
        .bind(&dudi.address)
        .bind(&dudi.phone)
        .bind(&dudi.email)
        .bind(&dudi.contact_person)
        .bind(&dudi.business_field)
        .bind(dudi.student_quota)
        .bind(dudi.active)
        .bind(dudi.created_at)
        .bind(dudi.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DudiNameExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, dudi: &Dudi) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE dudi
            SET company_name = $2, address = $3, phone = $4, email = $5, contact_person = $6,
                business_field = $7, student_quota = $8, active = $9, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(dudi.id)
        .bind(&dudi.company_name)
        .bind(&dudi.address)
        .bind(&dudi.phone)
        .bind(&dudi.email)
        .bind(&dudi.contact_person)
        .bind(&dudi.business_field)
        .bind(dudi.student_quota)
        .bind(dudi.active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DudiNameExists))?;

        if result.rows_affected() == 0 {
            return Err(dudi_not_found(dudi.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE dudi
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(dudi_not_found(id));
        }

        Ok(())
    }
}
