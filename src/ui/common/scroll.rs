//! Page scrolling helpers
//!
//! - Body overflow toggled by mounted overlays
//! - Smooth scrolling to in-page anchors
//! - Horizontal scrolling of card strips

use leptos::prelude::*;

use crate::core::ScrollDirection;

/// Set the `overflow` style of the document body
#[cfg(not(feature = "ssr"))]
pub(crate) fn set_body_overflow(value: &str) {
    if let Some(body) = leptos::web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Smoothly scroll the element with the given id into view.
/// Does nothing when no such element exists.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = leptos::web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}

/// Shift a horizontally scrolling strip by one step
pub fn scroll_strip(strip: NodeRef<leptos::html::Div>, direction: ScrollDirection) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys::{ScrollBehavior, ScrollToOptions};

        if let Some(element) = strip.get_untracked() {
            let options = ScrollToOptions::new();
            options.set_left(direction.offset());
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_by_with_scroll_to_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (strip, direction);
    }
}
