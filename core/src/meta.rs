//! Organization metadata
//!
//! The schema.org JSON-LD record published alongside the site. This is data
//! only; nothing in the app consumes it beyond printing it.

use serde_json::{json, Value};

/// Departments listed in the organization record.
pub const DEPARTMENTS: [&str; 4] = [
    "E‑Waste Recycling",
    "EPR & Consulting",
    "Wind Blade Recycling",
    "Lithium & EV Battery Recycling",
];

/// The organization record, minimal by intent.
pub fn organization() -> Value {
    let departments: Vec<Value> = DEPARTMENTS
        .iter()
        .map(|name| {
            json!({
                "@type": "Organization",
                "name": name,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": crate::content::COMPANY,
        "url": "https://refibe.in",
        "logo": "https://refibe.in/assets/refibe-logo.png",
        "department": departments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_record_shape() {
        let org = organization();
        assert_eq!(org["@type"], "Organization");
        assert_eq!(org["name"], crate::content::COMPANY);
        assert_eq!(org["department"].as_array().unwrap().len(), 4);
    }
}
