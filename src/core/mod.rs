//! Core site model: use-case catalog, showcase and lead wizard state, and the
//! server-side lead intake

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod lead;
#[cfg(feature = "ssr")]
pub mod leads;
pub mod showcase;
pub mod site;
#[cfg(test)]
mod tests;

pub use catalog::{Feature, FeatureKind, Industry, features_for, features_for_label};
pub use lead::{Advance, LeadForm, LeadWizard, OptIn, TextField, WizardPhase, WizardStep};
pub use showcase::{FeatureOverlay, ScrollDirection, ShowcaseState};
