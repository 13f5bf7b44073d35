//! # refibe CLI
//!
//! Command-line interface for the Refibe Innovations site - integrated
//! recycling services, rendered in your terminal.
//!
//! ## Usage
//!
//! - `refibe` - Open the interactive site at the landing page
//! - `refibe /security` - Open the interactive site at a route
//! - `refibe routes` - List the site's routes
//! - `refibe show <ROUTE>` - Print one page to stdout
//! - `refibe check` - Run the structural smoke checks
//!
//! The interactive mode is a full terminal UI powered by iocraft; the other
//! commands render plain styled text for scripts and pipes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{check_command, interactive_command, routes_command, show_command};
use config::CliConfigLoader;

/// refibe - the Refibe Innovations site in your terminal
#[derive(Parser)]
#[command(name = "refibe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Refibe Innovations - integrated recycling, in your terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output mode (default is normal mode)
    #[arg(short = 'd', long = "debug")]
    debug_output: bool,

    /// Route to open (if provided, the UI starts there, e.g. /services/epr)
    route: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the site's routes
    Routes {
        /// Print the organization JSON-LD record instead of the route table
        #[arg(long)]
        meta: bool,
    },

    /// Print one page to stdout without entering the UI
    Show {
        /// Route string, e.g. /services/ewaste
        route: String,
    },

    /// Run the structural smoke checks across all routes
    Check,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    refibe_core::init_tracing_with_debug(cli.verbose || cli.debug_output);

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match (cli.route, cli.command) {
        // If a route is provided, open the UI there
        (Some(route), None) => {
            interactive_command(config_loader, Some(route), cli.debug_output).await
        }
        // A route together with a subcommand is an error
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a route and a subcommand");
            std::process::exit(1);
        }
        // Handle subcommands
        (None, Some(Commands::Routes { meta })) => routes_command(meta).await,
        (None, Some(Commands::Show { route })) => show_command(route).await,
        (None, Some(Commands::Check)) => check_command().await,
        // Default to the interactive site at the landing page
        (None, None) => interactive_command(config_loader, None, cli.debug_output).await,
    }
}
