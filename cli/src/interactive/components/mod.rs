//! UI components for the interactive site

pub mod gradient;
pub mod nav;
pub mod sections;
pub mod status_bar;

pub use gradient::GradientText;
pub use nav::NavBar;
pub use status_bar::StatusBar;

use iocraft::prelude::Color;
use refibe_core::theme::Rgb;

/// Map a palette color into an iocraft color.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
