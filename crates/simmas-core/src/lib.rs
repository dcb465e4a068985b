//! # simmas-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_email, Batch, BatchFilter, ClientInfo, Dudi, Periode, PeriodeFilter, SessionInfo,
    User, ValidatedRefreshToken,
};
pub use error::DomainError;
pub use traits::{
    BatchRepository, DudiRepository, PeriodeRepository, RefreshTokenRepository, RepoResult,
    UserRepository,
};
pub use value_objects::{
    Action, PermissionTable, ProgramStatus, Role, RoleParseError, RoleSet, RoutePermission,
};
