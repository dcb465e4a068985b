//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, batch, dudi, health, periode, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(dudi_routes())
        .merge(periode_routes())
        .merge(batch_routes())
}

/// Authentication and account routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/logout-all", post(auth::logout_all))
        .route("/auth/me", get(auth::me))
        .route("/auth/me", patch(auth::update_me))
        .route("/auth/change-password", post(auth::change_password))
        .route("/auth/sessions", get(auth::sessions))
        .route("/auth/sessions/:session_id", delete(auth::revoke_session))
}

/// User administration routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", patch(users::update_user))
        .route("/users/:id", delete(users::delete_user))
}

/// Partner company routes
fn dudi_routes() -> Router<AppState> {
    Router::new()
        .route("/dudi", get(dudi::list_dudi))
        .route("/dudi", post(dudi::create_dudi))
        .route("/dudi/:id", get(dudi::get_dudi))
        .route("/dudi/:id", patch(dudi::update_dudi))
        .route("/dudi/:id", delete(dudi::delete_dudi))
}

/// Internship period routes
fn periode_routes() -> Router<AppState> {
    Router::new()
        .route("/periode", get(periode::list_periode))
        .route("/periode", post(periode::create_periode))
        .route("/periode/:id", get(periode::get_periode))
        .route("/periode/:id", patch(periode::update_periode))
        .route("/periode/:id", delete(periode::delete_periode))
}

/// Batch routes
fn batch_routes() -> Router<AppState> {
    Router::new()
        .route("/batch", get(batch::list_batch))
        .route("/batch", post(batch::create_batch))
        .route("/batch/:id", get(batch::get_batch))
        .route("/batch/:id", patch(batch::update_batch))
        .route("/batch/:id", delete(batch::delete_batch))
}
