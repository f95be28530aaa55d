//! Embedded stylesheet and page script.

use axum::{http::header, response::IntoResponse};

use super::super::assets;

/// Browser cache lifetime for embedded assets.
const ASSET_CACHE: &str = "public, max-age=3600";

fn embedded(content_type: &'static str, body: &'static str) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, ASSET_CACHE),
        ],
        body,
    )
}

/// `GET /static/style.css`
pub async fn serve_css() -> impl IntoResponse {
    embedded("text/css; charset=utf-8", assets::CSS)
}

/// `GET /static/map.js` (geolocation, auto-submit and the Leaflet map).
pub async fn serve_js() -> impl IntoResponse {
    embedded("application/javascript; charset=utf-8", assets::JS)
}
