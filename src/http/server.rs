//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all routes
//! - Wire up middleware (tracing, CORS, body limits)
//! - Inject the store handle as application state
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - Ordinary bodies are capped at 1 MB; the create route gets a larger
//!   allowance to fit the 5 MB image plus multipart framing. The per-file
//!   cap itself is enforced in the handler.
//! - CORS is permissive: any origin may call this API.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{
    create_polygon, get_polygon, get_polygon_image, health, list_polygons, MAX_IMAGE_BYTES,
};
use crate::store::PolygonStore;

/// Default cap on request bodies.
const BODY_LIMIT: usize = 1024 * 1024;

/// Body allowance for the create route: the image cap plus headroom for
/// the other form fields and multipart framing.
const CREATE_BODY_LIMIT: usize = MAX_IMAGE_BYTES + BODY_LIMIT;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: PolygonStore,
}

/// HTTP server for the polygon API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Create a new server around a store handle.
    pub fn new(store: PolygonStore) -> Self {
        let state = AppState { store };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(health))
            .route(
                "/polygons",
                get(list_polygons)
                    .post(create_polygon)
                    .layer(DefaultBodyLimit::max(CREATE_BODY_LIMIT)),
            )
            .route("/polygons/{id}", get(get_polygon))
            .route("/polygons/{id}/image", get(get_polygon_image))
            .with_state(state)
            .layer(DefaultBodyLimit::max(BODY_LIMIT))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
