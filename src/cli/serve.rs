//! Web server command.

use console::style;

use crate::config::{parse_bind_address, Config};

/// Start the web server.
pub async fn cmd_serve(config: &Config, bind: Option<&str>) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind.unwrap_or_else(|| config.bind()));

    if config.google.api_key.is_none() {
        println!(
            "{} GOOGLE_API_KEY is not set; address lookups and nearby search will fail",
            style("!").yellow()
        );
    }
    if config.llm.api_key.is_none() {
        println!(
            "{} OPENAI_API_KEY is not set; rescue plans will fail",
            style("!").yellow()
        );
    }

    println!(
        "{} Starting rescue assistant at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(config, &host, port).await
}
