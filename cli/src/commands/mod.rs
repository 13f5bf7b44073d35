//! CLI command implementations

pub mod check;
pub mod interactive;
pub mod routes;
pub mod show;

pub use check::check_command;
pub use interactive::interactive_command;
pub use routes::routes_command;
pub use show::show_command;
