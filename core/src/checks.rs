//! Development smoke checks
//!
//! Structural assertions over the rendered site: nav present, route
//! recognized, enough nav links, impact block on the landing page. They run
//! after route changes when enabled and on demand from the CLI. Failures
//! log warnings and change nothing else; no production behavior depends on
//! them.

use crate::content::{self, PageView};
use crate::routes::{Route, RouteMatch};
use tracing::{debug, warn};

/// One check outcome.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    fn new(name: &'static str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed,
            detail: detail.into(),
        }
    }
}

/// Smoke run outcome for one route string.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub route: String,
    pub checks: Vec<Check>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    /// Log the report: one warning per failing check, a single debug line
    /// when everything passed.
    pub fn log(&self) {
        for check in self.checks.iter().filter(|check| !check.passed) {
            warn!(check = check.name, detail = %check.detail, route = %self.route, "smoke check failed");
        }
        if self.all_passed() {
            debug!(route = %self.route, "smoke checks ok");
        }
    }
}

/// Run the smoke checks against a route string.
pub fn run(route: &str) -> CheckReport {
    let mut checks = Vec::new();

    checks.push(Check::new(
        "nav exists",
        !content::NAV_LINKS.is_empty(),
        "nav link table is populated",
    ));
    checks.push(Check::new(
        "nav has links",
        content::NAV_LINKS.len() >= 5,
        format!("{} links", content::NAV_LINKS.len()),
    ));

    let matched = RouteMatch::resolve(route);
    checks.push(Check::new(
        "route recognized",
        matches!(matched, RouteMatch::Page(_)),
        format!("route {route}"),
    ));

    if matched == RouteMatch::Page(Route::Home) {
        let impact_present = match content::view_of(Route::Home) {
            PageView::Landing(landing) => !landing.impact.heading.is_empty(),
            PageView::Detail(_) => false,
        };
        checks.push(Check::new(
            "impact on home",
            impact_present,
            "landing page carries the impact block",
        ));
    }

    CheckReport {
        route: route.to_string(),
        checks,
    }
}

/// Run the checks for every known route, landing first.
pub fn run_all() -> Vec<CheckReport> {
    Route::ALL.iter().map(|route| run(route.path())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_route_passes_everything() {
        let report = run("/");
        assert!(report.all_passed());
        assert!(report.checks.iter().any(|c| c.name == "impact on home"));
    }

    #[test]
    fn detail_routes_skip_the_impact_check() {
        let report = run("/security");
        assert!(report.all_passed());
        assert!(report.checks.iter().all(|c| c.name != "impact on home"));
    }

    #[test]
    fn unknown_route_fails_only_recognition() {
        let report = run("/nowhere");
        assert!(!report.all_passed());
        let failed: Vec<&str> = report
            .checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.name)
            .collect();
        assert_eq!(failed, vec!["route recognized"]);
    }

    #[test]
    fn run_all_covers_every_route() {
        let reports = run_all();
        assert_eq!(reports.len(), Route::ALL.len());
        assert!(reports.iter().all(|r| r.all_passed()));
    }
}
