//! Detail page content

use super::{Action, Cta, PageContent, Panel, Section, SectionBody};
use crate::routes::Route;
use crate::theme::Palette;

pub static EWASTE: PageContent = PageContent {
    route: Route::EWaste,
    palette: Palette::EWaste,
    subtitle: "From secure intake to high‑purity metal recovery — CPCB‑aligned, zero‑landfill operations.",
    sections: &[
        Section {
            heading: "What we handle",
            intro: None,
            body: SectionBody::Bullets(&[
                "IT assets (laptops, desktops, servers, storage, networking)",
                "Consumer electronics (mobiles, tablets, TVs, small/large appliances)",
                "Industrial electronics (automation, control, telecom)",
                "Data‑bearing media (HDD, SSD, NVMe, tapes, optical, flash)",
            ]),
            ctas: &[],
        },
        Section {
            heading: "Process at a glance",
            intro: None,
            body: SectionBody::Steps(&[
                "Intake & Chain‑of‑Custody — GPS tracked pickup, tamper‑evident seals, custody forms.",
                "Segregation & Pre‑processing — disassembly, hazardous removal, fractioning.",
                "Material Recovery — mechanical + hydrometallurgical steps for Cu/Al/Fe/precious metals.",
                "Compliance Evidence — manifests, test reports, and destruction certificates.",
            ]),
            ctas: &[Cta {
                key: 1,
                label: "Deep‑dive: Safe Data Destruction →",
                action: Action::Go(Route::DataDestruction),
            }],
        },
        Section {
            heading: "Why Refibe",
            intro: None,
            body: SectionBody::Bullets(&[
                "End‑to‑end audit trail with time‑stamped photos/videos (available where requested).",
                "On‑prem or off‑site options for sensitive devices with witnessed destruction.",
                "Recover value through buy‑back/remarketing where policy allows.",
            ]),
            ctas: &[],
        },
    ],
};

pub static DATA_DESTRUCTION: PageContent = PageContent {
    route: Route::DataDestruction,
    palette: Palette::EWaste,
    subtitle: "Policy‑driven, verifiable sanitization and destruction — aligned with NIST SP 800‑88 Rev.1.",
    sections: &[
        Section {
            heading: "Methods & Selection Matrix",
            intro: Some(
                "We choose methods based on media type, sensitivity, and customer policy. Typical options:",
            ),
            body: SectionBody::Panels(&[
                Panel {
                    heading: "Logical Sanitization",
                    bullets: &[
                        "Crypto‑erase (AES‑based key destruction) for SEDs",
                        "One‑pass overwrite (NIST Clear), multi‑pass when required",
                        "Firmware‑assisted sanitize commands (ATA Secure Erase/NVMe Format NVM)",
                        "Verification: hash sampling, full‑media verify where feasible",
                    ],
                },
                Panel {
                    heading: "Physical Destruction",
                    bullets: &[
                        "Degaussing for magnetic media (per coercivity specs)",
                        "Shredding to ≤10mm (or customer‑specified 20/30mm)",
                        "Punching/drilling + shear as interim controls before shredding",
                        "Witnessed destruction with video/photo evidence on request",
                    ],
                },
            ]),
            ctas: &[],
        },
        Section {
            heading: "Comprehensive Data Security Controls",
            intro: None,
            body: SectionBody::Panels(&[
                Panel {
                    heading: "Governance & Compliance",
                    bullets: &[
                        "Policies aligned with NIST SP 800‑88, ISO 27001 principles, and India’s DPDP Act",
                        "Signed NDAs and background‑verified personnel for secure zones",
                        "Segregation of duties; dual‑control for media handling",
                        "Audit‑ready logs, retention by agreement",
                    ],
                },
                Panel {
                    heading: "Facility & Operational Security",
                    bullets: &[
                        "24×7 CCTV, access control, visitor escort, no‑phone secure bays",
                        "Tamper‑evident seals; GPS‑tracked transport with chain‑of‑custody",
                        "Secure staging → sanitize/destruct → verification → certificate",
                        "Environmental controls: dust extraction, fire suppression",
                    ],
                },
            ]),
            ctas: &[],
        },
        Section {
            heading: "Certificates & Evidence",
            intro: None,
            body: SectionBody::Bullets(&[
                "Certificate of Data Destruction (per batch/serial lists)",
                "Video/photo evidence and hash reports (on request)",
                "Serial reconciliation reports; witness sign‑offs",
            ]),
            ctas: &[],
        },
        Section {
            heading: "On‑Prem Options",
            intro: None,
            body: SectionBody::Bullets(&[
                "Mobile shredders with HEPA filtration where permissible",
                "Portable degaussers and sanitize stations for data centers",
                "Refibe staff under customer supervision; no data leaves site",
            ]),
            ctas: &[],
        },
    ],
};

pub static EPR: PageContent = PageContent {
    route: Route::Epr,
    palette: Palette::Epr,
    subtitle: "End‑to‑end EPR lifecycle: assess, design, operate, report.",
    sections: &[
        Section {
            heading: "Scope",
            intro: None,
            body: SectionBody::Bullets(&[
                "Obligation computation by category and geography",
                "Channel partner network and take‑back design",
                "Awareness/CSR campaigns and consumer collection drives",
                "Evidence, filings, and audit interface",
            ]),
            ctas: &[],
        },
        Section {
            heading: "Dashboards",
            intro: None,
            body: SectionBody::Bullets(&[
                "Real‑time collections vs targets",
                "Inventory, transit, and processing status",
                "Certificates and reconciliation",
            ]),
            ctas: &[],
        },
    ],
};

pub static WIND: PageContent = PageContent {
    route: Route::Wind,
    palette: Palette::Wind,
    subtitle: "From decommissioning to composite re‑engineering.",
    sections: &[
        Section {
            heading: "Process",
            intro: None,
            body: SectionBody::Bullets(&[
                "On‑site sectioning and logistics",
                "Hybrid pyrolysis + resin extraction",
                "Recovered fiber/fillers → panels, sheets, components",
            ]),
            ctas: &[],
        },
        Section {
            heading: "Compliance & EHS",
            intro: None,
            body: SectionBody::Bullets(&[
                "PPE, dust control, and emissions monitoring",
                "Regulatory and environmental clearances",
                "Quality validation for re‑engineered outputs",
            ]),
            ctas: &[],
        },
    ],
};

pub static BATTERIES: PageContent = PageContent {
    route: Route::Batteries,
    palette: Palette::Batteries,
    subtitle: "Safe discharge to hydrometallurgy — circular battery materials.",
    sections: &[
        Section {
            heading: "Chemistries & Formats",
            intro: None,
            body: SectionBody::Bullets(&[
                "LFP, NMC, LCO, LMO; pouch/prismatic/18650/21700/pack",
                "EV, ESS, consumer, and industrial batteries",
            ]),
            ctas: &[],
        },
        Section {
            heading: "Process Stages",
            intro: None,
            body: SectionBody::Bullets(&[
                "Intake & testing → safe discharge → depowering",
                "Disassembly → cell opening under inert environment",
                "Black‑mass production → leach/solvent extraction → precipitation",
                "Crystallization to battery‑grade salts",
            ]),
            ctas: &[],
        },
        Section {
            heading: "Safety",
            intro: None,
            body: SectionBody::Bullets(&[
                "Fire suppression, gas monitoring, and spill kits",
                "Wastewater treatment and solvent recovery",
            ]),
            ctas: &[],
        },
    ],
};

pub static SECURITY: PageContent = PageContent {
    route: Route::Security,
    palette: Palette::Impact,
    subtitle: "End‑to‑end controls across people, process, and technology to protect data during recycling.",
    sections: &[
        Section {
            heading: "Security Domains",
            intro: None,
            body: SectionBody::Panels(&[
                Panel {
                    heading: "Access & Identity",
                    bullets: &[
                        "Role‑based access; MFA for systems; visitor escort policies",
                        "Background checks and NDAs for secure‑area staff",
                        "Device control (no cameras in secure bays)",
                    ],
                },
                Panel {
                    heading: "Encryption & Keys",
                    bullets: &[
                        "TLS in transit; storage encryption for logs and reports",
                        "Key lifecycle with split knowledge; HSM/KMS where applicable",
                        "Crypto‑erase for SEDs; proof of key destruction",
                    ],
                },
                Panel {
                    heading: "Monitoring & Audit",
                    bullets: &[
                        "24×7 CCTV retention by policy; tamper‑evident seals",
                        "SIEM for critical systems; immutable log streams",
                        "Chain‑of‑custody and reconciliation by serials",
                    ],
                },
                Panel {
                    heading: "Incident & Continuity",
                    bullets: &[
                        "IR playbooks, escalation matrix, simulation drills",
                        "Business continuity for secure destruction operations",
                        "Customer notification and evidence handback",
                    ],
                },
            ]),
            ctas: &[],
        },
        Section {
            heading: "Regulatory Alignment",
            intro: None,
            body: SectionBody::Bullets(&[
                "India’s Data Protection and Digital Privacy (DPDP) Act principles",
                "NIST SP 800‑88 Rev.1 sanitization guidance",
                "ISO 27001 control objectives (alignment)",
            ]),
            ctas: &[],
        },
        Section {
            heading: "Engage with Security",
            intro: Some(
                "Request our security whitepaper, sample certificates, and a witnessed destruction session.",
            ),
            body: SectionBody::Empty,
            ctas: &[
                Cta {
                    key: 1,
                    label: "Request Whitepaper",
                    action: Action::RequestWhitepaper,
                },
                Cta {
                    key: 2,
                    label: "Sample Certificates",
                    action: Action::RequestCertificates,
                },
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_destruction_methods_grid_has_both_columns() {
        let methods = &DATA_DESTRUCTION.sections[0];
        assert_eq!(methods.heading, "Methods & Selection Matrix");
        match methods.body {
            SectionBody::Panels(panels) => {
                assert_eq!(panels.len(), 2);
                assert_eq!(panels[0].heading, "Logical Sanitization");
                assert_eq!(panels[1].heading, "Physical Destruction");
            }
            _ => panic!("methods section should be a panel grid"),
        }
    }

    #[test]
    fn ewaste_deep_dives_into_data_destruction() {
        let ctas: Vec<&Cta> = EWASTE
            .sections
            .iter()
            .flat_map(|s| s.ctas.iter())
            .collect();
        assert_eq!(ctas.len(), 1);
        assert_eq!(ctas[0].action, Action::Go(Route::DataDestruction));
    }

    #[test]
    fn security_domains_render_as_four_panels() {
        match SECURITY.sections[0].body {
            SectionBody::Panels(panels) => assert_eq!(panels.len(), 4),
            _ => panic!("security domains should be a panel grid"),
        }
    }

    #[test]
    fn security_engage_ctas_are_local_placeholders() {
        let engage = SECURITY.sections.last().unwrap();
        assert_eq!(engage.ctas.len(), 2);
        assert_eq!(engage.ctas[0].action, Action::RequestWhitepaper);
        assert_eq!(engage.ctas[1].action, Action::RequestCertificates);
    }

    #[test]
    fn subtitles_are_set_on_every_page() {
        for page in [&EWASTE, &DATA_DESTRUCTION, &EPR, &WIND, &BATTERIES, &SECURITY] {
            assert!(!page.subtitle.is_empty());
            assert!(!page.sections.is_empty());
        }
    }
}
