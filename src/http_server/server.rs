//! # HTTP Server
//!
//! Combines the dive API, the health check, and the static front end
//! into one router with CORS and request tracing applied.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::dive_routes::{dive_routes, DiveState};
use super::static_routes::{static_routes, StaticState};
use crate::storage::DiveStore;

/// HTTP server for the dive log
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: DiveStore) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: DiveStore, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(store: DiveStore, config: &HttpServerConfig) -> Router {
        let dive_state = Arc::new(DiveState::new(store));
        let static_state = Arc::new(StaticState::new(config.static_dir.clone()));

        // Permissive CORS when no origins are configured (development),
        // otherwise the configured list
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Dive API under /api
            .nest("/api", dive_routes(dive_state))
            // Front end everywhere else (carries the fallback)
            .merge(static_routes(static_state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting divelog HTTP server");
        tracing::info!("dive log UI at http://{}/", addr);
        tracing::info!("API at http://{}/api/dives", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

// ==================
// Health Routes
// ==================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
