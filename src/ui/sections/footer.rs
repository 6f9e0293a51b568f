use leptos::prelude::*;

use super::brand::BrandMark;
use crate::core::site::TAGLINE;

const SOCIAL_LINKS: [&str; 3] = ["TWITTER", "GITHUB", "LINKEDIN"];

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full border-t border-white/5 bg-black pt-20 pb-12">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <div class="flex flex-col md:flex-row md:items-start justify-between mb-20 gap-12">
                    // Brand
                    <div class="max-w-md">
                        <div class="mb-8">
                            <BrandMark hover="group-hover:rotate-12" large=true/>
                        </div>
                        <p class="text-white/40 text-sm md:text-base leading-relaxed">{TAGLINE}</p>
                    </div>
                </div>

                // Bottom bar
                <div class="flex flex-col md:flex-row items-center justify-between pt-10 border-t border-white/5 gap-8">
                    <p class="text-white/20 text-[13px] font-medium tracking-tight">
                        "© 2025 Buildhouse Labs. Built with precision and clarity."
                    </p>
                    <div class="flex items-center gap-10">
                        {SOCIAL_LINKS.into_iter().map(|name| view! {
                            <a
                                href="#"
                                class="text-white/20 hover:text-white transition-colors text-[11px] font-bold uppercase tracking-[0.2em]"
                            >
                                {name}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
