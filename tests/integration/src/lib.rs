//! Integration test utilities for the SIMMAS auth service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API: server spawning, envelope assertions, and refresh
//! cookie handling.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
