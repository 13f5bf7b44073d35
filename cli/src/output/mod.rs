//! Plain-terminal page rendering
//!
//! Renders pages as flat line lists for the non-interactive `show` command,
//! reusing the site palettes so the output matches the UI.

pub mod page;

pub use page::page_lines;
