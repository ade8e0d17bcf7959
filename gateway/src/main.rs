//! Storefront front server
//!
//! Serves the built single-page application and relays `/api/**` and
//! `/uploads/**` traffic to the backend origin. Uses hexagonal (ports &
//! adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::HttpBackend;
use app::RelayService;
use config::Config;
use domain::ports::BackendTransport;

/// Application state shared across all handlers
pub struct AppState<B: BackendTransport> {
    pub relay: Arc<RelayService<B>>,
    pub max_body_bytes: usize,
}

impl<B: BackendTransport> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Build the gateway router: the two relay route classes first, then the SPA
/// bundle with `index.html` fallback for anything unmatched.
pub fn router<B: BackendTransport + 'static>(state: AppState<B>, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");
    let spa = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/api", any(handlers::relay_api::<B>))
        .route("/api/*path", any(handlers::relay_api::<B>))
        .route("/uploads", any(handlers::relay_upload::<B>))
        .route("/uploads/*path", any(handlers::relay_upload::<B>))
        .fallback_service(spa)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting storefront gateway...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let backend =
        Arc::new(HttpBackend::new(&config).expect("Failed to build backend HTTP client"));

    // Create application services
    let relay = Arc::new(RelayService::new(backend, config.backend_url.clone()));

    // Create app state
    let state = AppState {
        relay,
        max_body_bytes: config.max_body_bytes,
    };

    let app = router(state, &config.static_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {} (backend: {})", addr, config.backend_url);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
