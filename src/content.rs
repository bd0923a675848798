// The page itself: section copy and layout heights
//
// The studio's one-pager, defined statically. Heights are in virtual pixels;
// the section map stacks them contiguously from the top of the document.

use crate::page::section::SectionMap;

/// Copy and layout for one section of the page.
#[derive(Debug, Clone, Copy)]
pub struct SectionContent {
    pub id: &'static str,
    /// Label used in the navigation bar.
    pub nav_label: &'static str,
    pub heading: &'static str,
    pub body: &'static [&'static str],
    pub height: f32,
}

/// The page, top to bottom.
pub const SECTIONS: &[SectionContent] = &[
    SectionContent {
        id: "home",
        nav_label: "Home",
        heading: "Meridian Studio",
        body: &[
            "Digital products, built end to end.",
            "",
            "We design, build and ship web platforms for teams",
            "that care about the details.",
            "",
            "[ Get in touch -> contact ]",
        ],
        height: 500.0,
    },
    SectionContent {
        id: "about",
        nav_label: "About",
        heading: "About us",
        body: &[
            "A small senior team, working directly with yours.",
            "",
            "Twelve years of shipping: marketplaces, dashboards,",
            "developer tools, and the infrastructure behind them.",
            "No handoffs, no account managers.",
        ],
        height: 400.0,
    },
    SectionContent {
        id: "services",
        nav_label: "Services",
        heading: "Services",
        body: &[
            "* Product design - research, prototypes, design systems",
            "* Engineering - web apps, APIs, data pipelines",
            "* Advisory - audits, roadmaps, team coaching",
            "",
            "Fixed-scope engagements or embedded, your call.",
        ],
        height: 600.0,
    },
    SectionContent {
        id: "portfolio",
        nav_label: "Work",
        heading: "Selected work",
        body: &[
            "Atlas - logistics platform, 40k shipments a day",
            "Ledgerline - accounting for two-sided marketplaces",
            "Fieldnote - offline-first research capture",
            "Brume - observability for edge deployments",
        ],
        height: 600.0,
    },
    SectionContent {
        id: "contact",
        nav_label: "Contact",
        heading: "Get in touch",
        body: &[
            "Tell us about your project.",
            "We reply within two working days.",
        ],
        height: 400.0,
    },
];

/// Build the geometry map the locator works against.
pub fn section_map() -> SectionMap {
    SectionMap::from_heights(
        &SECTIONS
            .iter()
            .map(|section| (section.id, section.height))
            .collect::<Vec<_>>(),
    )
}
