//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::rescue_page))
        .route("/api/rescue", get(handlers::api_rescue))
        .route("/health", get(handlers::health))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/map.js", get(handlers::serve_js))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
