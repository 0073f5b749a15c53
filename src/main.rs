/**
 * Lamsa Server Entry Point
 *
 * Loads the environment, initializes tracing, builds the app and serves
 * it. A missing required variable (database URL, signing secret, blob
 * store credentials) aborts startup here; it is a deployment error, not
 * something handled per request.
 */

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use lamsa_site::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let port = config.port;

    let app = create_app(config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
