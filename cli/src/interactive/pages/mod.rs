//! Routed page bodies

pub mod detail;
pub mod landing;

use iocraft::prelude::*;
use refibe_core::content::{self, PageView};
use refibe_core::routes::RouteMatch;

use detail::DetailPage;
use landing::LandingPage;

/// Build the page body behind the nav bar. Unmatched routes keep the nav
/// and render an empty body.
pub fn outlet(matched: &RouteMatch, scroll: usize) -> AnyElement<'static> {
    match matched {
        RouteMatch::NotFound => element! { View {} }.into(),
        RouteMatch::Page(route) => match content::view_of(*route) {
            PageView::Landing(_) => element! { LandingPage(scroll: scroll) }.into(),
            PageView::Detail(page) => {
                element! { DetailPage(page: Some(page), scroll: scroll) }.into()
            }
        },
    }
}

/// Number of scrollable blocks on a page; scrolling stops at the last one.
/// The landing counts hero, each service row, impact, FAQ, and footer.
pub fn block_count(matched: &RouteMatch) -> usize {
    match matched {
        RouteMatch::NotFound => 1,
        RouteMatch::Page(route) => match content::view_of(*route) {
            PageView::Landing(landing) => landing.rows.len() + 4,
            PageView::Detail(page) => 1 + page.sections.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refibe_core::routes::Route;

    #[test]
    fn landing_scrolls_through_eight_blocks() {
        assert_eq!(block_count(&RouteMatch::Page(Route::Home)), 8);
    }

    #[test]
    fn detail_blocks_cover_header_and_sections() {
        for route in Route::ALL {
            if route == Route::Home {
                continue;
            }
            let count = block_count(&RouteMatch::Page(route));
            match content::view_of(route) {
                PageView::Detail(page) => assert_eq!(count, 1 + page.sections.len()),
                PageView::Landing(_) => unreachable!(),
            }
        }
    }

    #[test]
    fn unknown_route_has_a_single_empty_block() {
        assert_eq!(block_count(&RouteMatch::NotFound), 1);
    }
}
