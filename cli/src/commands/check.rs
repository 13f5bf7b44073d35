//! Smoke check command

use anyhow::Result;
use refibe_core::checks;
use tracing::info;

/// Run the structural smoke checks across all routes
///
/// The checks are advisory: failures are printed but never change the exit
/// status.
pub async fn check_command() -> Result<()> {
    info!("Running site smoke checks");

    println!("🔎 Running Refibe Site Checks\n");

    let mut failures = 0usize;
    for report in checks::run_all() {
        println!("📄 Route {}", report.route);
        for check in &report.checks {
            if check.passed {
                println!("   ✅ {}", check.name);
            } else {
                println!("   ❌ {} ({})", check.name, check.detail);
                failures += 1;
            }
        }
    }

    if failures == 0 {
        println!("\n🎉 Smoke checks OK");
    } else {
        println!("\n⚠️  {} check(s) failed", failures);
    }

    Ok(())
}
