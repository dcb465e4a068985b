//! Authentication utilities

mod jwt;
mod password;
mod refresh;

pub use jwt::{AccessClaims, JwtService};
pub use password::{hash_password, validate_password_strength, verify_password};
pub use refresh::generate_refresh_token;
