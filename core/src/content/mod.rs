//! Static site content
//!
//! Every page is a pure function of the tables in this module: plain data,
//! rendered verbatim, never computed or fetched. Pages hold no state of
//! their own, so adding or changing site copy means editing these tables
//! and nothing else.
//!
//! Submodules: [`landing`] for the home composition, [`pages`] for the six
//! detail pages.

pub mod landing;
pub mod pages;

use crate::routes::Route;
use crate::theme::Palette;
use chrono::Datelike;

/// What activating a CTA does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a page.
    Go(Route),
    /// Advance the landing view past the hero.
    Explore,
    /// Surface the contact mail address.
    Contact,
    /// Acknowledge a whitepaper request locally. No request is sent.
    RequestWhitepaper,
    /// Acknowledge a sample-certificate request locally. No request is sent.
    RequestCertificates,
}

/// A call to action, activated by its digit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub key: u8,
    pub label: &'static str,
    pub action: Action,
}

/// A headline statistic card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A bordered card inside a two-column grid.
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub heading: &'static str,
    pub bullets: &'static [&'static str],
}

/// Body of a page section.
#[derive(Debug, Clone, Copy)]
pub enum SectionBody {
    /// Unordered bullet list.
    Bullets(&'static [&'static str]),
    /// Numbered steps.
    Steps(&'static [&'static str]),
    /// Two-column grid of bordered panels.
    Panels(&'static [Panel]),
    /// Intro text and CTAs only.
    Empty,
}

/// One titled section of a detail page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub intro: Option<&'static str>,
    pub body: SectionBody,
    pub ctas: &'static [Cta],
}

/// A detail page. The heading comes from [`Route::title`], keeping the
/// designated title in exactly one place.
#[derive(Debug, Clone, Copy)]
pub struct PageContent {
    pub route: Route,
    pub palette: Palette,
    pub subtitle: &'static str,
    pub sections: &'static [Section],
}

impl PageContent {
    pub fn title(&self) -> &'static str {
        self.route.title()
    }
}

/// The landing hero block.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub tagline: &'static str,
    pub stats: &'static [Stat],
    pub ctas: &'static [Cta],
}

/// One of the landing service rows.
#[derive(Debug, Clone, Copy)]
pub struct ServiceRow {
    pub palette: Palette,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub cta: Cta,
}

/// The sustainability and impact block anchored on the landing page.
#[derive(Debug, Clone, Copy)]
pub struct Impact {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub stats: &'static [Stat],
}

/// A FAQ entry. Always rendered expanded.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The full landing composition.
#[derive(Debug, Clone, Copy)]
pub struct Landing {
    pub hero: Hero,
    pub rows: &'static [ServiceRow],
    pub impact: Impact,
    pub faq: &'static [FaqEntry],
}

/// A nav bar link.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// Brand wordmark shown in the nav bar; activating it goes home.
pub const BRAND: &str = "Refibe";

/// Legal entity named in the footer.
pub const COMPANY: &str = "Refibe Innovations Private Limited";

/// The nav bar links, left to right. The wordmark itself is a sixth,
/// implicit link to the landing page.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "E‑Waste",
        route: Route::EWaste,
    },
    NavLink {
        label: "EPR",
        route: Route::Epr,
    },
    NavLink {
        label: "Wind",
        route: Route::Wind,
    },
    NavLink {
        label: "Batteries",
        route: Route::Batteries,
    },
    NavLink {
        label: "Security",
        route: Route::Security,
    },
];

/// What a route renders as.
#[derive(Debug, Clone, Copy)]
pub enum PageView {
    Landing(&'static Landing),
    Detail(&'static PageContent),
}

/// Select the content behind a route. Exhaustive by construction: a new
/// `Route` variant will not compile until it gets content here.
pub fn view_of(route: Route) -> PageView {
    match route {
        Route::Home => PageView::Landing(landing::landing()),
        Route::EWaste => PageView::Detail(&pages::EWASTE),
        Route::DataDestruction => PageView::Detail(&pages::DATA_DESTRUCTION),
        Route::Epr => PageView::Detail(&pages::EPR),
        Route::Wind => PageView::Detail(&pages::WIND),
        Route::Batteries => PageView::Detail(&pages::BATTERIES),
        Route::Security => PageView::Detail(&pages::SECURITY),
    }
}

/// All CTAs reachable on a route, in render order. Key handling and page
/// rendering both read this, so the digits always agree.
pub fn actions_for(route: Route) -> Vec<Cta> {
    match view_of(route) {
        PageView::Landing(landing) => {
            let mut ctas: Vec<Cta> = landing.hero.ctas.to_vec();
            ctas.extend(landing.rows.iter().map(|row| row.cta));
            ctas
        }
        PageView::Detail(page) => page
            .sections
            .iter()
            .flat_map(|section| section.ctas.iter().copied())
            .collect(),
    }
}

/// Footer line with the current year.
pub fn footer_text() -> String {
    format!(
        "© {} {} · Privacy · Terms",
        chrono::Local::now().year(),
        COMPANY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_content() {
        for route in Route::ALL {
            match view_of(route) {
                PageView::Landing(_) => assert_eq!(route, Route::Home),
                PageView::Detail(page) => assert_eq!(page.route, route),
            }
        }
    }

    #[test]
    fn nav_has_at_least_five_links() {
        assert!(NAV_LINKS.len() >= 5);
    }

    #[test]
    fn nav_links_are_distinct_routes() {
        for (i, link) in NAV_LINKS.iter().enumerate() {
            assert_ne!(link.route, Route::Home);
            for other in &NAV_LINKS[i + 1..] {
                assert_ne!(link.route, other.route);
            }
        }
    }

    #[test]
    fn cta_keys_are_unique_per_route() {
        for route in Route::ALL {
            let ctas = actions_for(route);
            for (i, cta) in ctas.iter().enumerate() {
                assert!(cta.key >= 1 && cta.key <= 9);
                for other in &ctas[i + 1..] {
                    assert_ne!(cta.key, other.key, "duplicate CTA key on {route}");
                }
            }
        }
    }

    #[test]
    fn landing_ctas_cover_all_service_rows() {
        let ctas = actions_for(Route::Home);
        let targets: Vec<Route> = ctas
            .iter()
            .filter_map(|cta| match cta.action {
                Action::Go(route) => Some(route),
                _ => None,
            })
            .collect();
        assert!(targets.contains(&Route::EWaste));
        assert!(targets.contains(&Route::Epr));
        assert!(targets.contains(&Route::Wind));
        assert!(targets.contains(&Route::Batteries));
    }

    #[test]
    fn footer_names_the_company_and_year() {
        let footer = footer_text();
        assert!(footer.contains(COMPANY));
        assert!(footer.starts_with("© 2"));
    }
}
