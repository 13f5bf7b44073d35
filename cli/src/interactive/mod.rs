//! Interactive terminal UI
//!
//! The full-screen site: a nav bar, a routed page outlet, and a status bar,
//! driven by keyboard events and the core router.

pub mod app;
pub mod components;
pub mod pages;
pub mod text_utils;

pub use app::run_site;
