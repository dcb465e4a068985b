//! Entity ↔ model mappers

mod batch;
mod dudi;
mod periode;
mod refresh_token;
mod user;
