//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Company not found: {0}")]
    DudiNotFound(Uuid),

    #[error("Period not found: {0}")]
    PeriodeNotFound(Uuid),

    #[error("Batch not found: {0}")]
    BatchNotFound(Uuid),

    #[error("Session not found")]
    SessionNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Company name already registered")]
    DudiNameExists,

    #[error("Academic year already has a period")]
    AcademicYearExists,

    #[error("Batch name already used in this period")]
    BatchNameExists,

    /// A concurrent refresh already rotated this token
    #[error("Refresh token already rotated")]
    TokenAlreadyRotated,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::DudiNotFound(_) => "UNKNOWN_COMPANY",
            Self::PeriodeNotFound(_) => "UNKNOWN_PERIOD",
            Self::BatchNotFound(_) => "UNKNOWN_BATCH",
            Self::SessionNotFound => "UNKNOWN_SESSION",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::EmailAlreadyExists => "EMAIL_EXISTS",
            Self::DudiNameExists => "COMPANY_NAME_EXISTS",
            Self::AcademicYearExists => "ACADEMIC_YEAR_EXISTS",
            Self::BatchNameExists => "BATCH_NAME_EXISTS",
            Self::TokenAlreadyRotated => "TOKEN_ALREADY_ROTATED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this maps to HTTP 404
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::DudiNotFound(_)
                | Self::PeriodeNotFound(_)
                | Self::BatchNotFound(_)
                | Self::SessionNotFound
        )
    }

    /// Whether this maps to HTTP 400
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::WeakPassword(_)
        )
    }

    /// Whether this maps to HTTP 403
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingPermission(_))
    }

    /// Whether this maps to HTTP 409
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::DudiNameExists
                | Self::AcademicYearExists
                | Self::BatchNameExists
                | Self::TokenAlreadyRotated
        )
    }
}
