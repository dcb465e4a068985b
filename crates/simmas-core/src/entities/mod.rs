//! Domain entities

mod batch;
mod dudi;
mod periode;
mod session;
mod user;

pub use batch::{Batch, BatchFilter};
pub use dudi::Dudi;
pub use periode::{Periode, PeriodeFilter};
pub use session::{ClientInfo, SessionInfo, ValidatedRefreshToken};
pub use user::{normalize_email, User};
