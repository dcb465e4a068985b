//! PostgreSQL repository implementations

pub mod batch;
pub mod dudi;
pub mod error;
pub mod periode;
pub mod refresh_token;
pub mod user;

pub use batch::PgBatchRepository;
pub use dudi::PgDudiRepository;
pub use periode::PgPeriodeRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use user::PgUserRepository;
