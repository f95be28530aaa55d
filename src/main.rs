//! `rescue` - natural disaster rescue assistant.

use rescue_assistant::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log only warnings from this crate unless `-v` is given; `RUST_LOG` overrides both.
fn init_tracing(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rescue_assistant={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Provider keys usually come from .env; load it before config discovery.
    let _ = dotenvy::dotenv();

    init_tracing(cli::is_verbose());
    cli::run().await
}
