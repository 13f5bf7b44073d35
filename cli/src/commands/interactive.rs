//! Interactive mode command

use crate::interactive::app::run_site;
use anyhow::Result;
use tracing::debug;

/// Open the interactive site, optionally at a deep-linked route
pub async fn interactive_command(
    config_loader: crate::config::CliConfigLoader,
    route: Option<String>,
    debug_output: bool,
) -> Result<()> {
    if debug_output {
        debug!("Debug output enabled");
    }

    // Load site configuration
    let config = config_loader.load().await?;
    if debug_output {
        debug!("Contact address: {}", config.contact_email);
        debug!("Dev checks enabled: {}", config.dev_checks);
    }

    if let Some(route) = &route {
        debug!("Opening at route: {}", route);
    }

    run_site(config, route).await
}
