//! Section building blocks
//!
//! Plain builder functions that turn content tables into elements. Pages
//! assemble these instead of carrying their own layout code.

use iocraft::prelude::*;
use refibe_core::content::{Cta, FaqEntry, Panel, Section, SectionBody, Stat};
use refibe_core::theme::Palette;

use super::{rgb, GradientText};

/// One titled section of a detail page.
pub fn section_block(section: &'static Section, palette: Palette) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            Text(content: section.heading, weight: Weight::Bold)
            #(section.intro.map(|intro| element! {
                Text(content: intro)
            }))
            #(body_element(section.body, palette))
            #((!section.ctas.is_empty()).then(|| cta_row(section.ctas, palette)))
        }
    }
    .into()
}

fn body_element(body: SectionBody, palette: Palette) -> Option<AnyElement<'static>> {
    match body {
        SectionBody::Bullets(bullets) => Some(bullet_list(bullets)),
        SectionBody::Steps(steps) => Some(step_list(steps)),
        SectionBody::Panels(panels) => Some(panel_grid(panels, palette)),
        SectionBody::Empty => None,
    }
}

fn bullet_list(bullets: &'static [&'static str]) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column) {
            #(bullets.iter().map(|bullet| element! {
                Text(content: format!("• {}", bullet))
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

fn step_list(steps: &'static [&'static str]) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column) {
            #(steps.iter().enumerate().map(|(i, step)| element! {
                Text(content: format!("{}. {}", i + 1, step))
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

/// Bordered panels, two per row like the site's card grids.
fn panel_grid(panels: &'static [Panel], palette: Palette) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column) {
            #(panels.chunks(2).map(|pair| element! {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    #(pair.iter().map(|panel| panel_card(panel, palette)).collect::<Vec<_>>())
                }
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

fn panel_card(panel: &'static Panel, palette: Palette) -> AnyElement<'static> {
    let accent = palette.theme().terminal_accent();
    element! {
        View(
            width: 50pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: Color::DarkGrey,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: panel.heading, color: rgb(accent), weight: Weight::Bold)
            #(panel.bullets.iter().map(|bullet| element! {
                Text(content: format!("• {}", bullet))
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

/// Stat cards in a row; values take the rotating service palettes like the
/// hero and impact grids.
pub fn stat_cards(stats: &'static [Stat]) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap, gap: 1) {
            #(stats.iter().enumerate().map(|(i, stat)| element! {
                View(
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: Color::DarkGrey,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    GradientText(content: stat.value.to_string(), palette: Palette::rotating(i))
                    Text(content: stat.label, color: Color::DarkGrey)
                }
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

/// CTAs as `[key] label` chips; the digit key activates them.
pub fn cta_row(ctas: &'static [Cta], palette: Palette) -> AnyElement<'static> {
    let accent = palette.theme().terminal_accent();
    element! {
        View(flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap, gap: 2) {
            #(ctas.iter().map(|cta| element! {
                Text(
                    content: format!("[{}] {}", cta.key, cta.label),
                    color: rgb(accent),
                    weight: Weight::Bold,
                )
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

/// FAQ entries, always expanded, questions on the rotating palettes.
pub fn faq_list(entries: &'static [FaqEntry]) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column) {
            #(entries.iter().enumerate().map(|(i, entry)| element! {
                View(
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: Color::DarkGrey,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    GradientText(content: entry.question.to_string(), palette: Palette::rotating(i))
                    Text(content: entry.answer)
                }
            }).collect::<Vec<_>>())
        }
    }
    .into()
}
