//! # Divelog HTTP Server
//!
//! Axum server exposing the dive log REST API and the static front end.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/dives` - Dive CRUD
//! - `/api/stats` - Aggregate statistics
//! - `/`, `/{path}` - Static assets

pub mod config;
pub mod dive_routes;
pub mod errors;
pub mod server;
pub mod static_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
