//! One-shot lookup command.

use console::style;

use crate::config::Config;
use crate::models::{Coordinates, DisasterType, SearchRadius};
use crate::shell::{Providers, RescueInputs, RescueShell, SessionContext, UNRESOLVED_WARNING};

/// Arguments of a terminal lookup.
pub struct LookupRequest {
    pub disaster: String,
    pub radius: i64,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Run one render and print the result.
pub async fn cmd_lookup(config: &Config, request: LookupRequest) -> anyhow::Result<()> {
    let disaster = DisasterType::from_str(&request.disaster).ok_or_else(|| {
        let names: Vec<_> = DisasterType::ALL.iter().map(|d| d.as_str()).collect();
        anyhow::anyhow!(
            "Unknown disaster type '{}' (expected one of: {})",
            request.disaster,
            names.join(", ")
        )
    })?;

    let inputs = RescueInputs {
        address: request.address.unwrap_or_default(),
        disaster,
        radius: SearchRadius::clamped(request.radius),
    };
    let session = SessionContext::from_browser(Coordinates::from_parts(request.lat, request.lon));

    let shell = RescueShell::new(Providers::from_config(config));
    let outcome = shell.render(&inputs, &session).await?;

    match &outcome.detected_address {
        Some(address) => println!("📌 Detected/Entered Address: {}", style(address).bold()),
        None => println!("📌 Detected Address"),
    }

    let Some(help) = outcome.help else {
        println!("{}", style(UNRESOLVED_WARNING).yellow());
        return Ok(());
    };

    if let Some(coords) = outcome.coordinates {
        println!("  {}", style(coords).dim());
    }

    println!();
    println!("{}", style(format!("🧭 AI Rescue Plan for {}", disaster)).bold());
    println!("{}", help.plan);
    println!();

    println!(
        "{}",
        style(format!("🗺️ Nearby Help ({} mi)", outcome.radius_miles)).bold()
    );
    for count in &help.counts {
        println!("  {} {:<22} {}", count.glyph, count.label, count.count);
    }
    for place in &help.places {
        println!(
            "  {} {} {}",
            place.category.glyph(),
            place.name,
            style(&place.vicinity).dim()
        );
    }

    Ok(())
}
