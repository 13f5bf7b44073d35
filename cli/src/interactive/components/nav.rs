//! Top navigation bar
//!
//! Wordmark plus the five service links, with the current fragment and
//! history arrows on the right. Left/Right move the selection; the
//! bracketed entry is the one Enter opens.

use iocraft::prelude::*;
use refibe_core::content::{BRAND, NAV_LINKS};
use refibe_core::routes::{route_of_fragment, Route};
use refibe_core::theme::Palette;

use super::GradientText;

#[derive(Clone, Props)]
pub struct NavBarProps {
    /// Current location fragment, as the router holds it.
    pub fragment: String,
    /// Selected nav slot: 0 is the wordmark, 1..=5 the links.
    pub selected: usize,
    pub can_back: bool,
    pub can_forward: bool,
}

impl Default for NavBarProps {
    fn default() -> Self {
        Self {
            fragment: String::new(),
            selected: 0,
            can_back: false,
            can_forward: false,
        }
    }
}

/// Navigation bar pinned above the page outlet
#[component]
pub fn NavBar(_hooks: Hooks, props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    let current = Route::parse(&route_of_fragment(&props.fragment));
    let wordmark_selected = props.selected == 0;

    let history = format!(
        "{} {}",
        if props.can_back { "‹" } else { " " },
        if props.can_forward { "›" } else { " " },
    );
    let location = if props.fragment.is_empty() {
        "#/".to_string()
    } else {
        props.fragment.clone()
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                View(flex_direction: FlexDirection::Row) {
                    #(wordmark_selected.then(|| element! { Text(content: "[", weight: Weight::Bold) }))
                    GradientText(content: BRAND.to_string(), palette: Palette::Hero)
                    #(wordmark_selected.then(|| element! { Text(content: "]", weight: Weight::Bold) }))
                }
                #(NAV_LINKS.iter().enumerate().map(|(i, link)| {
                    let slot = i + 1;
                    let selected = props.selected == slot;
                    let active = current == Some(link.route);
                    let content = if selected {
                        format!("[{}]", link.label)
                    } else {
                        link.label.to_string()
                    };
                    element! {
                        Text(
                            content: content,
                            color: if active { Color::White } else { Color::DarkGrey },
                            weight: if selected || active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }).collect::<Vec<_>>())
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: history, color: Color::DarkGrey)
                Text(content: location, color: Color::DarkGrey)
            }
        }
    }
}
