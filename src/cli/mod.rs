//! CLI parser and dispatch.

mod lookup;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::models::SearchRadius;

#[derive(Parser)]
#[command(name = "rescue")]
#[command(about = "Natural disaster rescue assistant: nearby help and an AI rescue plan")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML, YAML or JSON); discovered automatically if omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web interface
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:8501)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Run one lookup in the terminal
    Lookup {
        /// Disaster type (Earthquake, Flood, Wildfire, Hurricane, Tornado, Landslide, Pandemic)
        #[arg(short, long, default_value = "Earthquake")]
        disaster: String,
        /// Search radius in miles (1-10)
        #[arg(short, long, default_value_t = SearchRadius::DEFAULT_MILES as i64)]
        radius: i64,
        /// Street address to geocode
        #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
        address: Option<String>,
        /// Latitude reported by a device
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude reported by a device
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };
    if let Some(path) = &config.source_path {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&config, bind.as_deref()).await,
        Commands::Lookup {
            disaster,
            radius,
            address,
            lat,
            lon,
        } => {
            let request = lookup::LookupRequest {
                disaster,
                radius,
                address,
                lat,
                lon,
            };
            lookup::cmd_lookup(&config, request).await
        }
    }
}
