//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the landing page, theme endpoints, and static assets
//! under a single Axum router. The page is rendered server-side per
//! request; the stylesheet and images are served from the assets directory
//! with gzip compression and request tracing.

pub mod pages;
pub mod theme;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(pages::landing))
        .route("/theme/toggle", post(theme::toggle))
        .route("/api/theme", get(theme::current))
        .route("/healthz", get(healthz))
        .nest_service("/assets", assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
