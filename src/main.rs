//! Polygon API
//!
//! A small HTTP service for storing and retrieving user-drawn map polygons,
//! built with Tokio and Axum over PostgreSQL.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                POLYGON API                  │
//!                    │                                             │
//!   Client Request   │  ┌─────────┐    ┌───────────┐               │
//!   ─────────────────┼─▶│  http   │───▶│ geometry  │               │
//!                    │  │ handlers│    │ normalize │               │
//!                    │  └────┬────┘    │ + bounds  │               │
//!                    │       │         └───────────┘               │
//!                    │       ▼                                     │
//!   Client Response  │  ┌─────────┐                                │
//!   ◀────────────────┼──│  store  │◀──────────────────────────────┼──── PostgreSQL
//!                    │  │ (sqlx)  │                                │
//!                    │  └─────────┘                                │
//!                    └────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polygon_api::config::AppConfig;
use polygon_api::http::ApiServer;
use polygon_api::store::PolygonStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `.env` is optional; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polygon_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("polygon-api v0.1.0 starting");

    // Missing DATABASE_URL is fatal; there is no degraded startup mode.
    let config = AppConfig::from_env()?;

    tracing::info!(port = config.port, "Configuration loaded");

    // Connect eagerly so an unreachable database fails startup.
    let store = PolygonStore::connect(&config.database_url).await?;
    store.ensure_schema().await?;

    tracing::info!("Database connection established");

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = ApiServer::new(store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
