//! Fixed site content and addresses

pub const BRAND: &str = "BUILDHOUSE";
pub const BRAND_SUFFIX: &str = "LABS";
pub const TAGLINE: &str =
    "We turn operational chaos into streamlined workflows\u{2014}so you can serve more clients, better.";

/// Anchor id of the use-cases section
pub const USE_CASES_ANCHOR: &str = "use-cases";

/// Scheduling page embedded after the lead form is submitted
pub const SCHEDULING_URL: &str = "https://cal.com/buildhouse-labs/secret";

/// Endpoint that receives completed lead forms
pub const LEADS_ENDPOINT: &str = "/api/leads";

/// Host shown in the demo mockup's fake address bar
pub const DEMO_HOST: &str = "mono-ai.cloud/demo";

/// Typeface treatment of a case study's wordmark
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoStyle {
    Serif,
    Playfair,
}

impl LogoStyle {
    pub fn class(&self) -> &'static str {
        match self {
            LogoStyle::Serif => "font-tymeless font-serif",
            LogoStyle::Playfair => "font-playfair font-medium",
        }
    }
}

/// Mark drawn next to a case study's wordmark
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoMark {
    Leaf,
    /// Solid glowing circle of the given hex color
    Orb(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub quote: &'static str,
    pub logo: &'static str,
    pub logo_style: LogoStyle,
    pub logo_mark: LogoMark,
    pub gradient: &'static str,
    pub stats: [Stat; 2],
    /// Visual card on the left on wide screens
    pub reversed: bool,
}

pub const CASE_STUDIES: [CaseStudy; 2] = [
    CaseStudy {
        quote: "It transformed how our staff connects with residents through preserved stories that create lasting impact.",
        logo: "Tymeless",
        logo_style: LogoStyle::Serif,
        logo_mark: LogoMark::Leaf,
        gradient: "bg-[radial-gradient(circle_at_20%_20%,_#1a1a1a_0%,_#000000_100%)] after:absolute after:inset-0 after:bg-[radial-gradient(circle_at_80%_80%,_oklch(0.65_0.15_45),_transparent_60%)] after:opacity-10",
        stats: [
            Stat {
                label: "CONVERSION",
                value: "+50%",
            },
            Stat {
                label: "ROI",
                value: "+145%",
            },
        ],
        reversed: false,
    },
    CaseStudy {
        quote: "Purple Studio transformed our workflow delivering cinema quality content faster while cutting costs.",
        logo: "Purple Studio",
        logo_style: LogoStyle::Playfair,
        logo_mark: LogoMark::Orb("#7C3AED"),
        gradient: "bg-[radial-gradient(circle_at_50%_50%,_#C4B5FD_0%,_#A78BFA_50%,_#8B5CF6_100%)]",
        stats: [
            Stat {
                label: "CONVERSION",
                value: "+120%",
            },
            Stat {
                label: "ROI",
                value: "+210%",
            },
        ],
        reversed: true,
    },
];
