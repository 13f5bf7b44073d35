//! Page printing command

use anyhow::Result;
use refibe_core::routes::RouteMatch;
use tracing::{debug, info};

/// Print one page to stdout without entering the UI
pub async fn show_command(route: String) -> Result<()> {
    info!("Rendering route {}", route);

    let width = crate::interactive::text_utils::get_terminal_width();
    let matched = RouteMatch::resolve(&route);

    // Unknown routes render an empty body, mirroring the UI outlet.
    if matched == RouteMatch::NotFound {
        debug!("Route {} not recognized, nothing to print", route);
        return Ok(());
    }

    for line in crate::output::page_lines(&matched, width) {
        println!("{}", line);
    }

    Ok(())
}
