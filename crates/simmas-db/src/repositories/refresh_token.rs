//! PostgreSQL implementation of RefreshTokenRepository
//!
//! Tokens are never hard-deleted; revocation sets `revoked_at` so the
//! table doubles as a session audit trail.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use simmas_core::entities::{ClientInfo, SessionInfo, ValidatedRefreshToken};
use simmas_core::error::DomainError;
use simmas_core::traits::{RefreshTokenRepository, RepoResult};

use crate::models::{SessionInfoModel, ValidatedTokenRow};

use super::error::map_db_error;

/// Default refresh token lifetime (7 days)
const DEFAULT_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
    ttl: Duration,
}

impl PgRefreshTokenRepository {
    /// Create a repository with the default 7-day token lifetime
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            ttl: Duration::seconds(DEFAULT_TTL_SECONDS),
        }
    }

    /// Create a repository with a custom token lifetime in seconds
    pub fn with_ttl(pool: PgPool, ttl_seconds: i64) -> Self {
        Self {
            pool,
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    async fn insert_token(
        executor: impl sqlx::PgExecutor<'_>,
        user_id: Uuid,
        token: &str,
        expires_at: chrono::DateTime<Utc>,
        client_info: &ClientInfo,
    ) -> Result<Uuid, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            r"
            INSERT INTO refresh_tokens (id, user_id, token, expires_at, device_info, ip_address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(token)
        .bind(expires_at)
        .bind(&client_info.device_info)
        .bind(&client_info.ip_address)
        .fetch_one(executor)
        .await
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token))]
    async fn create(
        &self,
        user_id: Uuid,
        token: &str,
        client_info: &ClientInfo,
    ) -> RepoResult<Uuid> {
        let expires_at = Utc::now() + self.ttl;
        Self::insert_token(&self.pool, user_id, token, expires_at, client_info)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, token))]
    async fn validate(&self, token: &str) -> RepoResult<Option<ValidatedRefreshToken>> {
        let row = sqlx::query_as::<_, ValidatedTokenRow>(
            r"
            SELECT rt.id AS token_id, rt.expires_at,
                   u.id AS user_id, u.email, u.role, u.first_name, u.last_name, u.phone,
                   u.verified, u.created_at AS user_created_at, u.updated_at AS user_updated_at
            FROM refresh_tokens rt
            JOIN users u ON u.id = rt.user_id
            WHERE rt.token = $1 AND rt.revoked_at IS NULL AND u.deleted_at IS NULL
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        // Expired tokens are revoked lazily on first sight
        if row.expires_at <= Utc::now() {
            sqlx::query(
                r"
                UPDATE refresh_tokens SET revoked_at = NOW()
                WHERE id = $1 AND revoked_at IS NULL
                ",
            )
            .bind(row.token_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Ok(None);
        }

        sqlx::query(
            r"
            UPDATE refresh_tokens SET last_used_at = NOW() WHERE id = $1
            ",
        )
        .bind(row.token_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        ValidatedRefreshToken::try_from(row).map(Some)
    }

    #[instrument(skip(self, old_token, new_token))]
    async fn rotate(
        &self,
        old_token: &str,
        new_token: &str,
        client_info: &ClientInfo,
    ) -> RepoResult<Uuid> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Only one concurrent caller can flip revoked_at from NULL;
        // everyone else sees zero rows and loses the race.
        let user_id = sqlx::query_scalar::<_, Uuid>(
            r"
            UPDATE refresh_tokens SET revoked_at = NOW()
            WHERE token = $1 AND revoked_at IS NULL
            RETURNING user_id
            ",
        )
        .bind(old_token)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::TokenAlreadyRotated)?;

        let expires_at = Utc::now() + self.ttl;
        let new_id = Self::insert_token(&mut *tx, user_id, new_token, expires_at, client_info)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(new_id)
    }

    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE refresh_tokens SET revoked_at = NOW()
            WHERE token = $1 AND revoked_at IS NULL
            ",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_by_id(&self, token_id: Uuid, user_id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens SET revoked_at = NOW()
            WHERE id = $1 AND user_id = $2 AND revoked_at IS NULL
            ",
        )
        .bind(token_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SessionNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_all_for_user(&self, user_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens SET revoked_at = NOW()
            WHERE user_id = $1 AND revoked_at IS NULL
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn cleanup_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens SET revoked_at = NOW()
            WHERE expires_at <= NOW() AND revoked_at IS NULL
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn active_sessions(&self, user_id: Uuid) -> RepoResult<Vec<SessionInfo>> {
        let rows = sqlx::query_as::<_, SessionInfoModel>(
            r"
            SELECT id, device_info, ip_address, created_at, last_used_at
            FROM refresh_tokens
            WHERE user_id = $1 AND revoked_at IS NULL AND expires_at > NOW()
            ORDER BY COALESCE(last_used_at, created_at) DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SessionInfo::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRefreshTokenRepository>();
    }

    #[test]
    fn test_default_ttl_is_seven_days() {
        assert_eq!(DEFAULT_TTL_SECONDS, 604_800);
    }
}
