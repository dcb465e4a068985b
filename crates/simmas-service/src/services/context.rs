//! Service context - dependency container for services
//!
//! Holds all repositories and shared services the business layer needs.

use std::sync::Arc;

use simmas_common::auth::JwtService;
use simmas_core::traits::{
    BatchRepository, DudiRepository, PeriodeRepository, RefreshTokenRepository, UserRepository,
};
use simmas_core::value_objects::{Action, PermissionTable, Role};
use simmas_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - The route permission table
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,
    dudi_repo: Arc<dyn DudiRepository>,
    periode_repo: Arc<dyn PeriodeRepository>,
    batch_repo: Arc<dyn BatchRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    permissions: Arc<PermissionTable>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        dudi_repo: Arc<dyn DudiRepository>,
        periode_repo: Arc<dyn PeriodeRepository>,
        batch_repo: Arc<dyn BatchRepository>,
        jwt_service: Arc<JwtService>,
        permissions: Arc<PermissionTable>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            refresh_token_repo,
            dudi_repo,
            periode_repo,
            batch_repo,
            jwt_service,
            permissions,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    /// Get the DUDI repository
    pub fn dudi_repo(&self) -> &dyn DudiRepository {
        self.dudi_repo.as_ref()
    }

    /// Get the periode repository
    pub fn periode_repo(&self) -> &dyn PeriodeRepository {
        self.periode_repo.as_ref()
    }

    /// Get the batch repository
    pub fn batch_repo(&self) -> &dyn BatchRepository {
        self.batch_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the route permission table
    pub fn permissions(&self) -> &PermissionTable {
        self.permissions.as_ref()
    }

    /// Check a route permission, failing with `PermissionDenied`
    pub fn ensure_permission(&self, path: &str, role: Role, action: Action) -> ServiceResult<()> {
        if self.permissions.has_permission(path, role, action) {
            Ok(())
        } else {
            Err(ServiceError::permission_denied(format!("{path}.{action}")))
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("permissions", &self.permissions.len())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    dudi_repo: Option<Arc<dyn DudiRepository>>,
    periode_repo: Option<Arc<dyn PeriodeRepository>>,
    batch_repo: Option<Arc<dyn BatchRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    permissions: Option<Arc<PermissionTable>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            refresh_token_repo: None,
            dudi_repo: None,
            periode_repo: None,
            batch_repo: None,
            jwt_service: None,
            permissions: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn dudi_repo(mut self, repo: Arc<dyn DudiRepository>) -> Self {
        self.dudi_repo = Some(repo);
        self
    }

    pub fn periode_repo(mut self, repo: Arc<dyn PeriodeRepository>) -> Self {
        self.periode_repo = Some(repo);
        self
    }

    pub fn batch_repo(mut self, repo: Arc<dyn BatchRepository>) -> Self {
        self.batch_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn permissions(mut self, table: Arc<PermissionTable>) -> Self {
        self.permissions = Some(table);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing.
    /// The permission table defaults to the built-in route table when unset.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.dudi_repo
                .ok_or_else(|| ServiceError::validation("dudi_repo is required"))?,
            self.periode_repo
                .ok_or_else(|| ServiceError::validation("periode_repo is required"))?,
            self.batch_repo
                .ok_or_else(|| ServiceError::validation("batch_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.permissions
                .unwrap_or_else(|| Arc::new(PermissionTable::default())),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
