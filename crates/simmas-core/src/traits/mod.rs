//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BatchRepository, DudiRepository, PeriodeRepository, RefreshTokenRepository, RepoResult,
    UserRepository,
};
