//! HTTP request handlers for the web server.

mod api;
mod page;
mod params;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_rescue, health};
pub use page::rescue_page;
pub use params::RescueParams;
pub use static_files::{serve_css, serve_js};
