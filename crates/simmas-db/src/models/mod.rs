//! Database models - SQLx-compatible structs for PostgreSQL tables

mod batch;
mod dudi;
mod periode;
mod refresh_token;
mod user;

pub use batch::BatchModel;
pub use dudi::DudiModel;
pub use periode::PeriodeModel;
pub use refresh_token::{SessionInfoModel, ValidatedTokenRow};
pub use user::UserModel;
