//! Web server for the rescue page.
//!
//! Serves the interactive page, a JSON rendition of the same render and the
//! static assets the page needs.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use handlers::RescueParams;
pub use routes::create_router;

use std::net::SocketAddr;

use crate::config::Config;
use crate::shell::{Providers, RescueShell};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub shell: RescueShell,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_providers(Providers::from_config(config))
    }

    pub fn with_providers(providers: Providers) -> Self {
        Self {
            shell: RescueShell::new(providers),
        }
    }
}

/// Start the web server.
pub async fn serve(config: &Config, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
