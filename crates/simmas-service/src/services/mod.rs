//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod batch;
pub mod context;
pub mod dudi;
pub mod error;
pub mod periode;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use batch::BatchService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dudi::DudiService;
pub use error::{ServiceError, ServiceResult};
pub use periode::PeriodeService;
pub use user::UserService;
