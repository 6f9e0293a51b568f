use leptos::prelude::*;

use super::brand::BrandMark;
use crate::core::site::USE_CASES_ANCHOR;
use crate::ui::common::{CtaButton, CtaStyle, scroll_to_anchor};

const LINK_CLASS: &str = "hover:text-white transition-colors";

/// Fixed top navigation bar
#[component]
pub fn Navbar(
    /// Opens the lead-capture form
    on_get_started: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 flex items-center justify-between px-5 py-4 md:px-12 md:py-4 w-full bg-black/80 backdrop-blur-xl border-b border-white/5">
            <BrandMark/>

            <div class="hidden md:flex items-center gap-8 text-sm font-medium text-white/50">
                <a
                    href=format!("#{}", USE_CASES_ANCHOR)
                    class=LINK_CLASS
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_anchor(USE_CASES_ANCHOR);
                    }
                >
                    "Use Cases"
                </a>
                <a href="#" class=LINK_CLASS>"Live Products"</a>
                <a href="#" class=LINK_CLASS>"Changelog"</a>
                <a href="#" class=LINK_CLASS>"Contact"</a>
            </div>

            <CtaButton style=CtaStyle::Glass on_click=on_get_started>
                "Get started"
            </CtaButton>
        </nav>
    }
}
