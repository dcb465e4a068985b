//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use simmas_common::{AppConfig, AppError, JwtService};
use simmas_core::value_objects::PermissionTable;
use simmas_db::{
    create_pool, run_migrations, PgBatchRepository, PgDudiRepository, PgPeriodeRepository,
    PgRefreshTokenRepository, PgUserRepository,
};
use simmas_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the Axum application with routes and the basic middleware stack
///
/// Used directly by the integration tests; `run` adds rate limiting
/// and CORS on top.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = simmas_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let refresh_token_repo = Arc::new(PgRefreshTokenRepository::with_ttl(
        pool.clone(),
        config.jwt.refresh_token_expiry,
    ));
    let dudi_repo = Arc::new(PgDudiRepository::new(pool.clone()));
    let periode_repo = Arc::new(PgPeriodeRepository::new(pool.clone()));
    let batch_repo = Arc::new(PgBatchRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .refresh_token_repo(refresh_token_repo)
        .dudi_repo(dudi_repo)
        .periode_repo(periode_repo)
        .batch_repo(batch_repo)
        .jwt_service(jwt_service)
        .permissions(Arc::new(PermissionTable::default()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let rate_limit = config.rate_limit.clone();
    let cors = config.cors.clone();
    let is_production = config.app.env.is_production();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application: health endpoints bypass rate limiting
    let router = apply_middleware_with_config(create_router(), &rate_limit, &cors, is_production);
    let app = router.merge(health_routes()).with_state(state);

    // Run server
    run_server(app, addr).await
}
