//! Detail page frame
//!
//! Back hint, gradient title, subtitle, then the content sections as
//! scrollable blocks.

use iocraft::prelude::*;
use refibe_core::content::PageContent;

use crate::interactive::components::sections::section_block;
use crate::interactive::components::GradientText;

#[derive(Clone, Props)]
pub struct DetailPageProps {
    pub page: Option<&'static PageContent>,
    pub scroll: usize,
}

impl Default for DetailPageProps {
    fn default() -> Self {
        Self {
            page: None,
            scroll: 0,
        }
    }
}

#[component]
pub fn DetailPage(_hooks: Hooks, props: &DetailPageProps) -> impl Into<AnyElement<'static>> {
    let page = match props.page {
        Some(page) => page,
        None => return element! { View {} },
    };

    let mut blocks: Vec<AnyElement<'static>> = vec![header_block(page)];
    for section in page.sections {
        blocks.push(section_block(section, page.palette));
    }

    element! {
        View(flex_direction: FlexDirection::Column, padding_left: 1, padding_right: 1) {
            #(blocks.into_iter().skip(props.scroll))
        }
    }
}

fn header_block(page: &'static PageContent) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            Text(content: "← Back to Home  [0]", color: Color::DarkGrey)
            GradientText(content: page.title().to_string(), palette: page.palette)
            Text(content: page.subtitle, color: Color::DarkGrey)
        }
    }
    .into()
}
