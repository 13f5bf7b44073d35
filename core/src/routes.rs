//! Route identity and fragment helpers
//!
//! The site's addressable locations are a closed set, so routes are an enum
//! rather than a string-keyed table. Matching is exact: no partial matching,
//! no parameters, no nesting. Strings that match nothing resolve to an
//! explicit [`RouteMatch::NotFound`] instead of being dropped silently.

use std::fmt;

/// The seven addressable pages of the site, in nav display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page (`/`)
    Home,
    /// E-waste service overview
    EWaste,
    /// Data destruction deep dive, nested under the e-waste service
    DataDestruction,
    /// EPR and consulting service
    Epr,
    /// Wind turbine blade recycling service
    Wind,
    /// Lithium and EV battery recycling service
    Batteries,
    /// Site-wide data security page
    Security,
}

impl Route {
    /// Every route, landing first.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::EWaste,
        Route::DataDestruction,
        Route::Epr,
        Route::Wind,
        Route::Batteries,
        Route::Security,
    ];

    /// The route string this page lives at.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::EWaste => "/services/ewaste",
            Route::DataDestruction => "/services/ewaste/data-destruction",
            Route::Epr => "/services/epr",
            Route::Wind => "/services/wind",
            Route::Batteries => "/services/batteries",
            Route::Security => "/security",
        }
    }

    /// The page's designated heading, rendered exactly as written here.
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "India’s First Integrated Recycling Company",
            Route::EWaste => "E‑Waste Recycling",
            Route::DataDestruction => "Safe Data Destruction",
            Route::Epr => "EPR & Consulting",
            Route::Wind => "Wind Turbine Blade Recycling",
            Route::Batteries => "Lithium & EV Battery Recycling",
            Route::Security => "Comprehensive Data Security",
        }
    }

    /// Exact-match lookup of a route string.
    pub fn parse(route: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a route string against the page set.
///
/// Unrecognized strings are a handled state, not an error: the outlet keeps
/// the nav chrome and renders an empty body for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// A recognized page.
    Page(Route),
    /// Anything else.
    NotFound,
}

impl RouteMatch {
    /// Resolve a route string (as returned by [`crate::Router::current_route`]).
    pub fn resolve(route: &str) -> RouteMatch {
        match Route::parse(route) {
            Some(route) => RouteMatch::Page(route),
            None => RouteMatch::NotFound,
        }
    }
}

/// Route string carried by a fragment: the leading `#` stripped, with the
/// empty fragment standing for the landing route.
pub fn route_of_fragment(fragment: &str) -> String {
    let stripped = fragment.strip_prefix('#').unwrap_or(fragment);
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Ensure a navigation target carries its `#` prefix.
pub fn normalize_fragment(to: &str) -> String {
    if to.starts_with('#') {
        to.to_string()
    } else {
        format!("#{to}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_roundtrip_through_parse() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Route::parse("/services"), None);
        assert_eq!(Route::parse("/services/ewaste/"), None);
        assert_eq!(Route::parse("/SERVICES/EWASTE"), None);
        assert_eq!(Route::parse("/services/ewaste/data"), None);
    }

    #[test]
    fn unknown_route_resolves_to_not_found() {
        assert_eq!(RouteMatch::resolve("/nope"), RouteMatch::NotFound);
        assert_eq!(
            RouteMatch::resolve("/security"),
            RouteMatch::Page(Route::Security)
        );
    }

    #[test]
    fn empty_fragment_means_landing() {
        assert_eq!(route_of_fragment(""), "/");
        assert_eq!(route_of_fragment("#"), "/");
        assert_eq!(route_of_fragment("#/"), "/");
    }

    #[test]
    fn fragment_strips_single_hash() {
        assert_eq!(route_of_fragment("#/security"), "/security");
        assert_eq!(route_of_fragment("/security"), "/security");
    }

    #[test]
    fn normalize_adds_hash_once() {
        assert_eq!(normalize_fragment("/services/epr"), "#/services/epr");
        assert_eq!(normalize_fragment("#/services/epr"), "#/services/epr");
    }

    #[test]
    fn titles_are_designated_exactly() {
        assert_eq!(Route::Home.title(), "India’s First Integrated Recycling Company");
        assert_eq!(Route::EWaste.title(), "E‑Waste Recycling");
        assert_eq!(Route::DataDestruction.title(), "Safe Data Destruction");
        assert_eq!(Route::Epr.title(), "EPR & Consulting");
        assert_eq!(Route::Wind.title(), "Wind Turbine Blade Recycling");
        assert_eq!(Route::Batteries.title(), "Lithium & EV Battery Recycling");
        assert_eq!(Route::Security.title(), "Comprehensive Data Security");
    }
}
