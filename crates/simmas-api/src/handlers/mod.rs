//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod batch;
pub mod dudi;
pub mod health;
pub mod periode;
pub mod users;
