//! Use-case catalog for the feature showcase
//!
//! Each industry vertical owns a fixed, ordered list of cards. The tables are
//! static so the showcase never has to handle a load failure.

/// Industry verticals shown as tabs, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Industry {
    #[default]
    Healthcare,
    Professional,
    Home,
    Agencies,
    SeniorLiving,
    AndMore,
}

impl Industry {
    /// Every vertical, in tab order
    pub const ALL: [Industry; 6] = [
        Industry::Healthcare,
        Industry::Professional,
        Industry::Home,
        Industry::Agencies,
        Industry::SeniorLiving,
        Industry::AndMore,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare Services",
            Industry::Professional => "Professional Services",
            Industry::Home => "Home Services",
            Industry::Agencies => "Advertising & Marketing Agencies",
            Industry::SeniorLiving => "Senior Living & Retirement Homes",
            Industry::AndMore => "And More",
        }
    }

    /// Look up a vertical by its tab label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.label() == label)
    }

    /// Stable identifier used for tab ids and keyed lists
    pub fn slug(&self) -> &'static str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::Professional => "professional",
            Industry::Home => "home",
            Industry::Agencies => "agencies",
            Industry::SeniorLiving => "senior-living",
            Industry::AndMore => "and-more",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.slug() == slug)
    }
}

/// What activating a card does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureKind {
    /// Opens the simulated product demo
    Demo,
    /// Opens the "schedule a call" prompt
    Schedule,
}

/// One use-case card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind background classes for the mesh gradient
    pub gradient: &'static str,
    pub kind: FeatureKind,
}

impl Feature {
    const fn demo(title: &'static str, description: &'static str, gradient: &'static str) -> Self {
        Self {
            title,
            description,
            gradient,
            kind: FeatureKind::Demo,
        }
    }

    const fn schedule(
        title: &'static str,
        description: &'static str,
        gradient: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            gradient,
            kind: FeatureKind::Schedule,
        }
    }

    pub fn is_schedule(&self) -> bool {
        self.kind == FeatureKind::Schedule
    }

    /// Path segment shown in the demo mockup's address bar
    pub fn demo_slug(&self) -> String {
        self.title.to_lowercase().replace(' ', "-")
    }
}

const HEALTHCARE: &[Feature] = &[
    Feature::demo(
        "Patient Intake & Scheduling Automation",
        "Streamline the patient journey with intelligent intake forms and automated scheduling that reduces wait times and no-shows.",
        "bg-[radial-gradient(circle_at_top_right,_var(--tw-gradient-stops))] from-blue-600 via-indigo-600 to-cyan-500",
    ),
    Feature::demo(
        "Clinical Documentation & Coding",
        "Reduce clinician burnout with AI-driven voice-to-text transcription and automated medical coding for faster, more accurate billing.",
        "bg-[radial-gradient(circle_at_bottom_left,_var(--tw-gradient-stops))] from-teal-500 via-emerald-600 to-indigo-700",
    ),
    Feature::demo(
        "Staff Scheduling & Labor Optimization",
        "Predict patient volume fluctuations and optimize shifts to ensure high quality care while reducing labor overhead.",
        "bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-purple-600 via-pink-600 to-blue-800",
    ),
];

const PROFESSIONAL: &[Feature] = &[
    Feature::demo(
        "Document Review & Contract Analysis",
        "Instantly identify critical clauses, risk factors, and compliance gaps across high volumes of legal and financial documents.",
        "bg-[radial-gradient(circle_at_top_right,_var(--tw-gradient-stops))] from-slate-700 via-blue-900 to-black",
    ),
    Feature::demo(
        "Knowledge Base & Expertise Capture",
        "Transform internal documentation and tacit knowledge into a searchable, intelligent assistant for staff onboarding and daily operations.",
        "bg-[radial-gradient(circle_at_bottom_left,_var(--tw-gradient-stops))] from-indigo-800 via-violet-900 to-blue-950",
    ),
    Feature::demo(
        "Client Communication & Reporting Automation",
        "Generate high-fidelity client reports and automate routine correspondence while maintaining a personalized, professional touch.",
        "bg-[radial-gradient(circle_at_top_left,_var(--tw-gradient-stops))] from-emerald-800 via-cyan-900 to-slate-900",
    ),
];

const HOME: &[Feature] = &[
    Feature::demo(
        "AI Dispatching & Route Optimization",
        "Dynamically assign service calls based on technician skill set, proximity, and real-time traffic to maximize billable hours.",
        "bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-orange-600 via-red-700 to-amber-950",
    ),
    Feature::demo(
        "Call Center & Lead Qualification",
        "Automated voice and text interaction that qualifies leads and schedules appointments 24/7 without human intervention.",
        "bg-[radial-gradient(circle_at_bottom_right,_var(--tw-gradient-stops))] from-stone-700 via-orange-900 to-black",
    ),
    Feature::demo(
        "Technician Enablement & Upsell Prompting",
        "Provide on-site staff with real-time equipment history and AI-driven recommendations for relevant service upgrades.",
        "bg-[radial-gradient(circle_at_top_left,_var(--tw-gradient-stops))] from-blue-900 via-indigo-950 to-emerald-900",
    ),
];

const AGENCIES: &[Feature] = &[
    Feature::demo(
        "Creative Production Acceleration",
        "Scale content generation across all formats with AI that understands brand voice, visual style, and campaign goals.",
        "bg-[radial-gradient(circle_at_bottom_right,_var(--tw-gradient-stops))] from-fuchsia-700 via-rose-800 to-indigo-950",
    ),
    Feature::demo(
        "Campaign Performance & Reporting Automation",
        "Synthesize data from fragmented channels into actionable insights and client-ready decks in minutes, not days.",
        "bg-[radial-gradient(circle_at_top_right,_var(--tw-gradient-stops))] from-yellow-500 via-orange-700 to-red-950",
    ),
    Feature::demo(
        "Media Planning & Audience Intelligence",
        "Predict high-performing audience segments and optimize spend allocation using advanced pattern recognition.",
        "bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-blue-700 via-indigo-900 to-violet-950",
    ),
];

const SENIOR_LIVING: &[Feature] = &[
    Feature::demo(
        "Family Communication & Engagement Platform",
        "Automated updates and personalized memory sharing that keeps families connected to their loved ones' daily life.",
        "bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-blue-500 via-indigo-700 to-slate-950",
    ),
    Feature::demo(
        "Resident Monitoring & Fall Prevention",
        "Predictive analytics that identify movement changes or activity patterns indicative of health risks or potential falls.",
        "bg-[radial-gradient(circle_at_bottom_left,_var(--tw-gradient-stops))] from-rose-600 via-pink-800 to-black",
    ),
    Feature::demo(
        "Staff Scheduling & Compliance Documentation",
        "Streamline complex labor management and ensure every care interaction is accurately logged for regulatory compliance.",
        "bg-[radial-gradient(circle_at_top_right,_var(--tw-gradient-stops))] from-emerald-700 via-teal-900 to-blue-950",
    ),
    Feature::demo(
        "AI tools for story and memory",
        "Preserve resident history through AI-assisted storytelling and memory cognitive exercises designed to improve quality of life.",
        "bg-[radial-gradient(circle_at_bottom_right,_var(--tw-gradient-stops))] from-indigo-600 via-purple-800 to-stone-900",
    ),
];

const AND_MORE: &[Feature] = &[Feature::schedule(
    "Let's hear from you",
    "Schedule a free Call with our specialized engineers to discuss how we can build a custom AI layer for your unique industry needs.",
    "bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-indigo-500 via-purple-800 to-black",
)];

/// Ordered cards for a vertical
pub fn features_for(industry: Industry) -> &'static [Feature] {
    match industry {
        Industry::Healthcare => HEALTHCARE,
        Industry::Professional => PROFESSIONAL,
        Industry::Home => HOME,
        Industry::Agencies => AGENCIES,
        Industry::SeniorLiving => SENIOR_LIVING,
        Industry::AndMore => AND_MORE,
    }
}

/// Ordered cards for a tab label; unknown labels have no cards
pub fn features_for_label(label: &str) -> &'static [Feature] {
    Industry::from_label(label).map(features_for).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_industry_is_first_tab() {
        assert_eq!(Industry::default(), Industry::ALL[0]);
        assert_eq!(Industry::default().label(), "Healthcare Services");
    }

    #[test]
    fn test_label_roundtrip_for_every_industry() {
        for industry in Industry::ALL {
            assert_eq!(Industry::from_label(industry.label()), Some(industry));
            assert_eq!(Industry::from_slug(industry.slug()), Some(industry));
        }
    }

    #[test]
    fn test_unknown_label_yields_no_cards() {
        assert!(Industry::from_label("Aerospace").is_none());
        assert!(features_for_label("Aerospace").is_empty());
        assert!(features_for_label("").is_empty());
    }

    #[test]
    fn test_card_counts_per_industry() {
        assert_eq!(features_for(Industry::Healthcare).len(), 3);
        assert_eq!(features_for(Industry::Professional).len(), 3);
        assert_eq!(features_for(Industry::Home).len(), 3);
        assert_eq!(features_for(Industry::Agencies).len(), 3);
        assert_eq!(features_for(Industry::SeniorLiving).len(), 4);
        assert_eq!(features_for(Industry::AndMore).len(), 1);
    }

    #[test]
    fn test_card_order_is_fixed() {
        let titles: Vec<_> = features_for(Industry::Home).iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "AI Dispatching & Route Optimization",
                "Call Center & Lead Qualification",
                "Technician Enablement & Upsell Prompting",
            ]
        );
    }

    #[test]
    fn test_only_and_more_has_schedule_card() {
        for industry in Industry::ALL {
            let has_schedule = features_for(industry).iter().any(Feature::is_schedule);
            assert_eq!(has_schedule, industry == Industry::AndMore, "{}", industry.label());
        }
    }

    #[test]
    fn test_no_card_appears_under_two_industries() {
        for a in Industry::ALL {
            for b in Industry::ALL {
                if a == b {
                    continue;
                }
                for card in features_for(a) {
                    assert!(!features_for(b).contains(card));
                }
            }
        }
    }

    #[test]
    fn test_demo_slug() {
        let card = features_for(Industry::Healthcare)[1];
        assert_eq!(card.demo_slug(), "clinical-documentation-&-coding");
    }
}
