//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Batch, BatchFilter, ClientInfo, Dudi, Periode, PeriodeFilter, SessionInfo, User,
    ValidatedRefreshToken,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live (non-deleted) user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find a live user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if an email is already taken by a live user
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List all live users (admin view)
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields, role, and verification flag
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user (sets `deleted_at`)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Insert a new active token for the user; returns the row id
    async fn create(
        &self,
        user_id: Uuid,
        token: &str,
        client_info: &ClientInfo,
    ) -> RepoResult<Uuid>;

    /// Validate a token: present, not revoked, owner not soft-deleted, not
    /// expired. An expired token is marked revoked as a side effect (lazy
    /// cleanup); a valid one gets its last-used timestamp bumped. Returns
    /// `None` for any invalid token.
    async fn validate(&self, token: &str) -> RepoResult<Option<ValidatedRefreshToken>>;

    /// Atomically exchange `old_token` for `new_token` in one transaction.
    /// Exactly one concurrent caller can win; the losers get
    /// [`DomainError::TokenAlreadyRotated`].
    async fn rotate(
        &self,
        old_token: &str,
        new_token: &str,
        client_info: &ClientInfo,
    ) -> RepoResult<Uuid>;

    /// Revoke a single token; idempotent (revoking a revoked or unknown
    /// token is a no-op)
    async fn revoke(&self, token: &str) -> RepoResult<()>;

    /// Revoke one session by row id, scoped to its owner
    async fn revoke_by_id(&self, token_id: Uuid, user_id: Uuid) -> RepoResult<()>;

    /// Revoke every active token of a user (logout from all devices)
    async fn revoke_all_for_user(&self, user_id: Uuid) -> RepoResult<u64>;

    /// Mark all expired-but-unrevoked tokens revoked; returns how many
    async fn cleanup_expired(&self) -> RepoResult<u64>;

    /// Active sessions for the account page
    async fn active_sessions(&self, user_id: Uuid) -> RepoResult<Vec<SessionInfo>>;
}

// ============================================================================
// DUDI Repository
// ============================================================================

#[async_trait]
pub trait DudiRepository: Send + Sync {
    /// Find a live company by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Dudi>>;

    /// List all live companies, newest first
    async fn list(&self) -> RepoResult<Vec<Dudi>>;

    /// Check if a company name is already registered
    async fn name_exists(&self, company_name: &str) -> RepoResult<bool>;

    /// Create a new company
    async fn create(&self, dudi: &Dudi) -> RepoResult<()>;

    /// Update an existing company
    async fn update(&self, dudi: &Dudi) -> RepoResult<()>;

    /// Soft delete a company
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Periode Repository
// ============================================================================

#[async_trait]
pub trait PeriodeRepository: Send + Sync {
    /// Find a live period by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Periode>>;

    /// List live periods matching the filter, newest first
    async fn list(&self, filter: &PeriodeFilter) -> RepoResult<Vec<Periode>>;

    /// Check if an academic year already has a live period
    /// (case-insensitive)
    async fn academic_year_exists(&self, academic_year: &str) -> RepoResult<bool>;

    /// Create a new period
    async fn create(&self, periode: &Periode) -> RepoResult<()>;

    /// Update an existing period
    async fn update(&self, periode: &Periode) -> RepoResult<()>;

    /// Soft delete a period
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Batch Repository
// ============================================================================

#[async_trait]
pub trait BatchRepository: Send + Sync {
    /// Find a live batch by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Batch>>;

    /// List live batches matching the filter, newest first
    async fn list(&self, filter: &BatchFilter) -> RepoResult<Vec<Batch>>;

    /// Count the live active batches of a period
    async fn count_active(&self, periode_id: Uuid) -> RepoResult<u64>;

    /// Create a new batch
    async fn create(&self, batch: &Batch) -> RepoResult<()>;

    /// Update an existing batch
    async fn update(&self, batch: &Batch) -> RepoResult<()>;

    /// Soft delete a batch
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}
