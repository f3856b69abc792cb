//! Static Asset Routes
//!
//! Serves the front end: `/` maps to `index.html`, any other unmatched
//! path maps to a file under the static directory. Paths under `api/`
//! and anything containing a traversal component answer 404 with the
//! standard JSON error body.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::errors::ErrorResponse;

// ==================
// Shared State
// ==================

/// Static file state shared across handlers
pub struct StaticState {
    pub root: PathBuf,
}

impl StaticState {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

// ==================
// Static Routes
// ==================

/// Create static asset routes; the asset handler doubles as the router's
/// fallback so it only sees requests no API route matched
pub fn static_routes(state: Arc<StaticState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .fallback(asset_handler)
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn index_handler(State(state): State<Arc<StaticState>>) -> Response {
    serve_file(state.root.join("index.html")).await
}

async fn asset_handler(State(state): State<Arc<StaticState>>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Unmatched /api/* requests fall through to here
    if path.starts_with("api/") {
        return not_found();
    }

    let relative = Path::new(path);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return not_found();
    }

    serve_file(state.root.join(relative)).await
}

async fn serve_file(path: PathBuf) -> Response {
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = content_type_for(&path);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Not found")),
    )
        .into_response()
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
