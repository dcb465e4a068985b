//! Value objects - immutable domain types

mod permissions;
mod role;
mod status;

pub use permissions::{Action, PermissionTable, RoutePermission};
pub use role::{Role, RoleParseError, RoleSet};
pub use status::{ProgramStatus, StatusParseError};
