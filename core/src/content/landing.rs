//! Landing page content

use super::{Action, Cta, FaqEntry, Hero, Impact, Landing, ServiceRow, Stat};
use crate::theme::Palette;

static LANDING: Landing = Landing {
    hero: Hero {
        tagline: "Circularity. Innovation. Sustainability.",
        stats: &[
            Stat {
                value: "99.9%+",
                label: "Traceability",
            },
            Stat {
                value: "0",
                label: "Landfill",
            },
            Stat {
                value: "95%+",
                label: "Battery Metal Recovery",
            },
            Stat {
                value: "CPCB/ISO",
                label: "Certified",
            },
        ],
        ctas: &[
            Cta {
                key: 1,
                label: "Explore Our Work",
                action: Action::Explore,
            },
            Cta {
                key: 2,
                label: "Contact",
                action: Action::Contact,
            },
        ],
    },
    rows: &[
        ServiceRow {
            palette: Palette::EWaste,
            eyebrow: "E‑Waste Recycling",
            title: "Turning E‑Waste into E‑Value",
            intro: "Certified collection, secure data destruction, and high‑yield metal recovery.",
            cta: Cta {
                key: 3,
                label: "Explore E‑Waste",
                action: Action::Go(crate::routes::Route::EWaste),
            },
        },
        ServiceRow {
            palette: Palette::Epr,
            eyebrow: "EPR & Consulting",
            title: "Extended Producer Responsibility — Simplified",
            intro: "Obligation assessment, portal onboarding, take‑back networks, and filings.",
            cta: Cta {
                key: 4,
                label: "Explore EPR",
                action: Action::Go(crate::routes::Route::Epr),
            },
        },
        ServiceRow {
            palette: Palette::Wind,
            eyebrow: "Wind Turbine Blade Recycling",
            title: "Recycling the Future of Wind",
            intro: "Composite blade decommissioning to material re‑engineering for reuse.",
            cta: Cta {
                key: 5,
                label: "Explore Wind",
                action: Action::Go(crate::routes::Route::Wind),
            },
        },
        ServiceRow {
            palette: Palette::Batteries,
            eyebrow: "Lithium & EV Battery Recycling",
            title: "Recharging Sustainability",
            intro: "Safe discharge, black‑mass, hydrometallurgical recovery to battery‑grade salts.",
            cta: Cta {
                key: 6,
                label: "Explore Batteries",
                action: Action::Go(crate::routes::Route::Batteries),
            },
        },
    ],
    impact: Impact {
        eyebrow: "Sustainability & Impact",
        heading: "Circular by Design",
        paragraphs: &[
            "Every ton we recycle reduces CO₂ by up to 1.6 tons. Our closed‑loop systems support India’s 2070 net‑zero vision across electronics, renewable assets, and mobility.",
            "We collaborate with state agencies and partners; dashboards surface live offsets, recycled tonnage, and end‑use destinations for recovered materials.",
        ],
        stats: &[
            Stat {
                value: "1.6 t",
                label: "CO₂ avoided per ton recycled",
            },
            Stat {
                value: "120K+",
                label: "Tons recovered annually",
            },
            Stat {
                value: "98%",
                label: "Target recovery efficiency",
            },
        ],
    },
    faq: &[
        FaqEntry {
            question: "Are you CPCB/ISO certified?",
            answer: "Operations are CPCB‑authorized and aligned with ISO 9001/14001 and ISO 45001 management systems. Data destruction follows NIST SP 800‑88 Rev.1 guidance and DoD‑style multi‑pass options when required.",
        },
        FaqEntry {
            question: "Do you provide pickup/logistics across India?",
            answer: "Yes. Pan‑India reverse logistics with GPS tracking, tamper‑evident seals, and full chain‑of‑custody documentation.",
        },
        FaqEntry {
            question: "What recovery efficiencies do you achieve?",
            answer: "Typical metal recovery from e‑waste exceeds 98% (Cu/Ag/Au). Battery black‑mass processing targets >95% recovery across Li‑Ni‑Co‑Mn chemistries.",
        },
        FaqEntry {
            question: "How do you help with EPR targets?",
            answer: "We compute obligations, design take‑back, onboard on CPCB portal, and generate quarterly/annual filings with evidence aggregation.",
        },
    ],
};

/// The landing composition.
pub fn landing() -> &'static Landing {
    &LANDING
}
