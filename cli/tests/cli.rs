//! End-to-end tests for the non-interactive commands
//!
//! The interactive UI needs a terminal, so these drive the plain surfaces:
//! `routes`, `show`, `check`, and argument handling.

use assert_cmd::Command;
use predicates::prelude::*;

fn refibe() -> Command {
    Command::cargo_bin("refibe").unwrap()
}

#[test]
fn routes_lists_every_route_with_titles() {
    refibe()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/services/ewaste"))
        .stdout(predicate::str::contains("/services/ewaste/data-destruction"))
        .stdout(predicate::str::contains("/services/epr"))
        .stdout(predicate::str::contains("/services/wind"))
        .stdout(predicate::str::contains("/services/batteries"))
        .stdout(predicate::str::contains("/security"))
        .stdout(predicate::str::contains("India’s First Integrated Recycling Company"))
        .stdout(predicate::str::contains("Comprehensive Data Security"));
}

#[test]
fn routes_meta_prints_the_organization_record() {
    refibe()
        .args(["routes", "--meta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"@type\": \"Organization\""))
        .stdout(predicate::str::contains("Refibe Innovations Private Limited"))
        .stdout(predicate::str::contains("E‑Waste Recycling"));
}

#[test]
fn show_prints_the_landing_page() {
    refibe()
        .args(["show", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Circularity. Innovation. Sustainability."))
        .stdout(predicate::str::contains("Turning E‑Waste into E‑Value"))
        .stdout(predicate::str::contains("Frequently Asked Questions"))
        .stdout(predicate::str::contains("Refibe Innovations Private Limited"));
}

#[test]
fn show_prints_a_detail_page_with_sections() {
    refibe()
        .args(["show", "/security"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comprehensive Data Security"))
        .stdout(predicate::str::contains("Security Domains"))
        .stdout(predicate::str::contains("Access & Identity"))
        .stdout(predicate::str::contains("[1] Request Whitepaper"));
}

#[test]
fn show_renders_panel_grids() {
    refibe()
        .args(["show", "/services/ewaste/data-destruction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logical Sanitization"))
        .stdout(predicate::str::contains("Physical Destruction"));
}

#[test]
fn show_unknown_route_prints_nothing() {
    refibe()
        .args(["show", "/services/unknown"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn show_requires_an_exact_route_match() {
    // A trailing slash is a different string, so it renders nothing.
    refibe()
        .args(["show", "/security/"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_reports_every_route() {
    refibe()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route /security"))
        .stdout(predicate::str::contains("Smoke checks OK"));
}

#[test]
fn route_and_subcommand_together_fail() {
    refibe()
        .args(["/security", "routes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot specify both a route and a subcommand",
        ));
}
