//! Feature showcase state: the active industry tab and the open card overlay

use super::catalog::{Feature, FeatureKind, Industry, features_for};

/// Horizontal distance one scroll button moves the card strip, in pixels
pub const SCROLL_STEP_PX: f64 = 400.0;

/// Overlay opened from a card, tagged by what it shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureOverlay {
    /// Simulated product demo for a regular card
    Demo(&'static Feature),
    /// "Schedule a call" prompt for the call-to-action card
    Schedule(&'static Feature),
}

impl FeatureOverlay {
    pub fn for_feature(feature: &'static Feature) -> Self {
        match feature.kind {
            FeatureKind::Demo => FeatureOverlay::Demo(feature),
            FeatureKind::Schedule => FeatureOverlay::Schedule(feature),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ShowcaseState {
    pub active: Industry,
    pub overlay: Option<FeatureOverlay>,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs. An open overlay stays open.
    pub fn select(&mut self, industry: Industry) {
        self.active = industry;
    }

    /// Cards for the active tab, in display order
    pub fn cards(&self) -> &'static [Feature] {
        features_for(self.active)
    }

    /// Open the overlay matching the card's kind, replacing any open one
    pub fn open(&mut self, feature: &'static Feature) -> FeatureOverlay {
        let overlay = FeatureOverlay::for_feature(feature);
        self.overlay = Some(overlay);
        overlay
    }

    pub fn dismiss(&mut self) {
        self.overlay = None;
    }
}

/// Direction of a card strip scroll button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Signed horizontal offset to scroll by
    pub fn offset(&self) -> f64 {
        match self {
            ScrollDirection::Left => -SCROLL_STEP_PX,
            ScrollDirection::Right => SCROLL_STEP_PX,
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            ScrollDirection::Left => "Scroll left",
            ScrollDirection::Right => "Scroll right",
        }
    }
}
