//! PostgreSQL implementation of PeriodeRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use simmas_core::entities::{Periode, PeriodeFilter};
use simmas_core::error::DomainError;
use simmas_core::traits::{PeriodeRepository, RepoResult};

use crate::models::PeriodeModel;

use super::error::{map_db_error, map_unique_violation, periode_not_found};

const DEFAULT_PAGE_SIZE: i64 = 100;

/// PostgreSQL implementation of PeriodeRepository
#[derive(Clone)]
pub struct PgPeriodeRepository {
    pool: PgPool,
}

impl PgPeriodeRepository {
    /// Create a new PgPeriodeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PeriodeRepository for PgPeriodeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Periode>> {
        let result = sqlx::query_as::<_, PeriodeModel>(
            r"
            SELECT id, name, academic_year, start_date, end_date, status, description,
                   target_students, created_at, updated_at, deleted_at
            FROM periode
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Periode::try_from).transpose()
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &PeriodeFilter) -> RepoResult<Vec<Periode>> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT id, name, academic_year, start_date, end_date, status, description, \
             target_students, created_at, updated_at, deleted_at \
             FROM periode WHERE deleted_at IS NULL",
        );

        if let Some(status) = filter.status {
            query.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            query.push(" AND (name ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR academic_year ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR description ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        query.push(" ORDER BY created_at DESC");
        query
            .push(" LIMIT ")
            .push_bind(filter.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query
            .push(" OFFSET ")
            .push_bind(filter.offset.unwrap_or(0));

        let rows = query
            .build_query_as::<PeriodeModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Periode::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn academic_year_exists(&self, academic_year: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM periode
                WHERE LOWER(academic_year) = LOWER($1) AND deleted_at IS NULL
            )
            ",
        )
        .bind(academic_year)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, periode: &Periode) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO periode (id, name, academic_year, start_date, end_date, status,
                                 description, target_students, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(periode.id)
        .bind(&periode.name)
        .bind(&periode.academic_year)
        .bind(periode.start_date)
        .bind(periode.end_date)
        .bind(periode.status.as_str())
        .bind(&periode.description)
        .bind(periode.target_students)
        .bind(periode.created_at)
        .bind(periode.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AcademicYearExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, periode: &Periode) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE periode
            SET name = $2, academic_year = $3, start_date = $4, end_date = $5, status = $6,
                description = $7, target_students = $8, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(periode.id)
        .bind(&periode.name)
        .bind(&periode.academic_year)
        .bind(periode.start_date)
        .bind(periode.end_date)
        .bind(periode.status.as_str())
        .bind(&periode.description)
        .bind(periode.target_students)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AcademicYearExists))?;

        if result.rows_affected() == 0 {
            return Err(periode_not_found(periode.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE periode
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(periode_not_found(id));
        }

        Ok(())
    }
}
