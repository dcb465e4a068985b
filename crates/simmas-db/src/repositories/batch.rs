//! PostgreSQL implementation of BatchRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use simmas_core::entities::{Batch, BatchFilter};
use simmas_core::error::DomainError;
use simmas_core::traits::{BatchRepository, RepoResult};
use simmas_core::value_objects::ProgramStatus;

use crate::models::BatchModel;

use super::error::{batch_not_found, map_db_error, map_unique_violation};

const DEFAULT_PAGE_SIZE: i64 = 100;

/// PostgreSQL implementation of BatchRepository
#[derive(Clone)]
pub struct PgBatchRepository {
    pool: PgPool,
}

impl PgBatchRepository {
    /// Create a new PgBatchRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchRepository for PgBatchRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Batch>> {
        let result = sqlx::query_as::<_, BatchModel>(
            r"
            SELECT id, periode_id, name, semester, start_date, end_date, status,
                   description, student_quota, created_at, updated_at, deleted_at
            FROM batch
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Batch::try_from).transpose()
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &BatchFilter) -> RepoResult<Vec<Batch>> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT id, periode_id, name, semester, start_date, end_date, status, \
             description, student_quota, created_at, updated_at, deleted_at \
             FROM batch WHERE deleted_at IS NULL",
        );

        if let Some(periode_id) = filter.periode_id {
            query.push(" AND periode_id = ").push_bind(periode_id);
        }
        if let Some(status) = filter.status {
            query.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            query.push(" AND (name ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR semester ILIKE ");
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
            .build_query_as::<BatchModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Batch::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_active(&self, periode_id: Uuid) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM batch
            WHERE periode_id = $1 AND status = $2 AND deleted_at IS NULL
            ",
        )
        .bind(periode_id)
        .bind(ProgramStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn create(&self, batch: &Batch) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO batch (id, periode_id, name, semester, start_date, end_date,
                               status, description, student_quota, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(batch.id)
        .bind(batch.periode_id)
        .bind(&batch.name)
        .bind(&batch.semester)
        .bind(batch.start_date)
        .bind(batch.end_date)
        .bind(batch.status.as_str())
        .bind(&batch.description)
        .bind(batch.student_quota)
        .bind(batch.created_at)
        .bind(batch.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::BatchNameExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, batch: &Batch) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE batch
            SET name = $2, semester = $3, start_date = $4, end_date = $5, status = $6,
                description = $7, student_quota = $8, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(batch.id)
        .bind(&batch.name)
        .bind(&batch.semester)
        .bind(batch.start_date)
        .bind(batch.end_date)
        .bind(batch.status.as_str())
        .bind(&batch.description)
        .bind(batch.student_quota)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::BatchNameExists))?;

        if result.rows_affected() == 0 {
            return Err(batch_not_found(batch.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE batch
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(batch_not_found(id));
        }

        Ok(())
    }
}
