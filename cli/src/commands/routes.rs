//! Routes listing command

use anyhow::Result;
use colored::Colorize;
use refibe_core::routes::Route;
use refibe_core::{content, meta};
use tracing::info;

/// List the site's routes, or print the organization metadata record
pub async fn routes_command(print_meta: bool) -> Result<()> {
    if print_meta {
        info!("Printing organization metadata");
        println!("{}", serde_json::to_string_pretty(&meta::organization())?);
        return Ok(());
    }

    info!("Listing site routes");

    println!("{}\n", format!("🌐 {} routes", content::BRAND).bold());

    for route in Route::ALL {
        println!("  {:<42} {}", route.path().cyan(), route.title());
    }

    println!(
        "\n💡 Open a route directly with {} or print it with {}",
        "refibe /services/epr".bold(),
        "refibe show /services/epr".bold()
    );

    Ok(())
}
