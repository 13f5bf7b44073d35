//! Gradient text component
//!
//! The terminal counterpart of the site's gradient headings: every
//! character takes its color from the palette, sampled across the text.

use iocraft::prelude::*;
use refibe_core::theme::{Palette, Theme};

use super::rgb;

#[derive(Clone, Props)]
pub struct GradientTextProps {
    pub content: String,
    pub palette: Palette,
    pub bold: bool,
}

impl Default for GradientTextProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            palette: Palette::Hero,
            bold: true,
        }
    }
}

/// Text colored per character along a palette gradient
#[component]
pub fn GradientText(_hooks: Hooks, props: &GradientTextProps) -> impl Into<AnyElement<'static>> {
    let base = props.palette.theme();
    let theme = Theme {
        stops: base.terminal_stops(),
        ..*base
    };
    let chars: Vec<char> = props.content.chars().collect();
    let len = chars.len();
    let weight = if props.bold {
        Weight::Bold
    } else {
        Weight::Normal
    };

    element! {
        View(flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap) {
            #(chars.into_iter().enumerate().map(|(i, ch)| {
                let color = theme.color_at(i, len);
                element! {
                    Text(
                        content: ch.to_string(),
                        color: rgb(color),
                        weight: weight,
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
