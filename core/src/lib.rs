//! # refibe-core
//!
//! Core library for the Refibe Innovations terminal site.
//!
//! This library provides the building blocks behind every surface of the
//! site: the route set and observable router, the static content tables the
//! pages render from, the gradient palettes, the development smoke checks,
//! and the resolved runtime configuration.

// Core modules
pub mod checks;
pub mod config;
pub mod content;
pub mod error;
pub mod meta;
pub mod router;
pub mod routes;
pub mod theme;

// Re-export commonly used types
pub use config::SiteConfig;
pub use router::{RouteChange, Router};
pub use routes::{Route, RouteMatch};

/// Current version of the refibe-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the site binaries. Logs go to stderr so page
/// output stays pipeable; `debug` widens the filter from warnings to the
/// full debug stream.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
