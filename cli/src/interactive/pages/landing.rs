//! Landing page
//!
//! Hero, four service rows, impact, FAQ, and the footer, as scrollable
//! blocks. Scrolling skips whole blocks rather than lines.

use iocraft::prelude::*;
use refibe_core::content::{self, Impact, Landing, ServiceRow};
use refibe_core::routes::Route;
use refibe_core::theme::Palette;

use crate::interactive::components::sections::{cta_row, faq_list, stat_cards};
use crate::interactive::components::GradientText;

#[derive(Clone, Props)]
pub struct LandingPageProps {
    pub scroll: usize,
}

impl Default for LandingPageProps {
    fn default() -> Self {
        Self { scroll: 0 }
    }
}

#[component]
pub fn LandingPage(_hooks: Hooks, props: &LandingPageProps) -> impl Into<AnyElement<'static>> {
    let landing = content::landing::landing();

    let mut blocks: Vec<AnyElement<'static>> = Vec::new();
    blocks.push(hero_block(landing));
    for row in landing.rows {
        blocks.push(row_block(row));
    }
    blocks.push(impact_block(&landing.impact));
    blocks.push(faq_block(landing));
    blocks.push(footer_block());

    element! {
        View(flex_direction: FlexDirection::Column, padding_left: 1, padding_right: 1) {
            #(blocks.into_iter().skip(props.scroll))
        }
    }
}

fn hero_block(landing: &'static Landing) -> AnyElement<'static> {
    element! {
        View(
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            margin_bottom: 1,
        ) {
            GradientText(content: Route::Home.title().to_string(), palette: Palette::Hero)
            GradientText(content: landing.hero.tagline.to_string(), palette: Palette::Hero, bold: false)
            #(cta_row(landing.hero.ctas, Palette::Hero))
            #(stat_cards(landing.hero.stats))
        }
    }
    .into()
}

fn row_block(row: &'static ServiceRow) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            Text(content: row.eyebrow.to_uppercase(), color: Color::DarkGrey)
            GradientText(content: row.title.to_string(), palette: row.palette)
            Text(content: row.intro)
            #(cta_row(std::slice::from_ref(&row.cta), row.palette))
        }
    }
    .into()
}

fn impact_block(impact: &'static Impact) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            Text(content: impact.eyebrow.to_uppercase(), color: Color::DarkGrey)
            GradientText(content: impact.heading.to_string(), palette: Palette::Impact)
            #(impact.paragraphs.iter().map(|paragraph| element! {
                Text(content: *paragraph)
            }).collect::<Vec<_>>())
            #(stat_cards(impact.stats))
        }
    }
    .into()
}

fn faq_block(landing: &'static Landing) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            GradientText(content: "Frequently Asked Questions".to_string(), palette: Palette::EWaste)
            #(faq_list(landing.faq))
        }
    }
    .into()
}

fn footer_block() -> AnyElement<'static> {
    element! {
        View(justify_content: JustifyContent::Center) {
            Text(content: content::footer_text(), color: Color::DarkGrey)
        }
    }
    .into()
}
