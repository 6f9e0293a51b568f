use leptos::prelude::*;

use crate::core::site::{TAGLINE, USE_CASES_ANCHOR};
use crate::ui::common::{CtaButton, CtaStyle, scroll_to_anchor};
use crate::ui::icon::{Icon, icons};

/// Above-the-fold headline with the two primary actions
#[component]
pub fn Hero(
    /// Opens the lead-capture form
    on_get_started: Callback<()>,
) -> impl IntoView {
    let learn_more = Callback::new(|_| scroll_to_anchor(USE_CASES_ANCHOR));

    view! {
        <div class="px-6 pt-24 pb-12 text-center max-w-4xl mx-auto flex flex-col items-center">
            // Badge
            <div class="inline-flex items-center gap-2 px-3 py-1 mb-6 md:mb-8 rounded-full bg-gradient-to-r from-green-500/10 via-emerald-500/10 to-blue-500/10 border border-green-500/20 backdrop-blur-md text-[12px] md:text-[13px] text-white/90 animate-fade-in-up">
                <Icon name=icons::SPARKLES class="w-3 h-3"/>
                <span>"Your AI Partner"</span>
            </div>

            <h1 class="text-5xl sm:text-6xl md:text-7xl font-bold tracking-tight mb-6 md:mb-8 leading-[1.2] md:leading-[1.1] text-white animate-fade-in-up delay-100">
                "The AI layer that powers " <br/>
                <span class="italic font-normal opacity-90 font-serif inline-block px-1 pb-1">
                    <span class="bg-gradient-to-r from-green-400 via-emerald-500 to-blue-500 bg-clip-text text-transparent">
                        "service"
                    </span>
                    " businesses."
                </span>
            </h1>

            <p class="text-lg sm:text-xl md:text-xl text-white/60 max-w-2xl mb-10 md:mb-12 leading-relaxed animate-fade-in-up delay-200">
                {TAGLINE}
            </p>

            <div class="flex flex-col sm:flex-row gap-4 w-full sm:w-auto animate-fade-in-up delay-300">
                <CtaButton style=CtaStyle::Gradient on_click=on_get_started>
                    "Get started"
                </CtaButton>
                <CtaButton style=CtaStyle::Outline on_click=learn_more>
                    "Learn more"
                </CtaButton>
            </div>
        </div>
    }
}
