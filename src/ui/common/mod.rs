//! Common reusable UI components
//!
//! Building blocks shared by the landing page sections, the feature overlays
//! and the lead-capture form.

pub mod button;
pub mod form;
pub mod overlay;
pub mod scroll;
pub mod tabs;

pub use button::{CtaButton, CtaStyle};
pub use form::{CheckboxField, FormField, TextAreaField};
pub use overlay::Overlay;
pub use scroll::{scroll_strip, scroll_to_anchor};
pub use tabs::{TabItem, Tabs};
