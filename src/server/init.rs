/**
 * Server Initialization
 *
 * This module builds the application from a loaded configuration:
 * connect the database pool, run migrations, construct the shared state
 * and assemble the router.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;

use crate::auth::sessions::TokenService;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;
use crate::upload::storage::BlobStore;

/// Create and configure the application
///
/// # Initialization Steps
///
/// 1. Connect the PostgreSQL pool
/// 2. Run embedded migrations
/// 3. Build the shared state (token service keys derived once here)
/// 4. Assemble the router with the admin gate on mutating routes
///
/// Migration failures are logged but do not abort startup; the schema may
/// already be in place from an earlier deploy.
pub async fn create_app(config: ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("running database migrations");
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("failed to run migrations: {:?}", e);
        tracing::warn!("continuing without migrations - schema may already exist");
    }

    let state = AppState {
        db: pool,
        tokens: TokenService::new(&config.jwt_secret),
        blob: BlobStore::new(config.blob_store_url, config.blob_rw_token),
    };

    Ok(create_router(state))
}
