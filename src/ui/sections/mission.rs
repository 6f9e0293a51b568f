use leptos::prelude::*;

use crate::core::site::CASE_STUDIES;

const PILLARS: [(&str, &str); 3] = [
    (
        "Map the chaos",
        "We sit with your team, trace every hand-off and find the work that should never have been manual.",
    ),
    (
        "Build the layer",
        "Purpose-built AI tools wired into the systems you already run, not another dashboard to babysit.",
    ),
    (
        "Stay in the loop",
        "We measure what changed and keep tuning until the numbers move.",
    ),
];

/// Mission statement with the three working principles
#[component]
pub fn Mission() -> impl IntoView {
    view! {
        <div class="w-full max-w-5xl mx-auto px-6 md:px-12 text-center">
            <p class="text-white/40 text-[11px] uppercase tracking-[0.25em] font-bold mb-6">"Our mission"</p>
            <h2 class="text-3xl md:text-5xl font-bold tracking-tight leading-[1.15] text-white max-w-3xl mx-auto">
                "Give every service business the operations of a company ten times its size."
            </h2>

            <div class="grid md:grid-cols-3 gap-6 mt-16 text-left">
                {PILLARS.into_iter().map(|(title, body)| view! {
                    <div class="p-6 rounded-3xl bg-white/[0.03] border border-white/5">
                        <h3 class="text-lg font-semibold text-white mb-2">{title}</h3>
                        <p class="text-sm text-white/50 leading-relaxed">{body}</p>
                    </div>
                }).collect_view()}
            </div>

            <Logos/>
        </div>
    }
}

/// Row of client wordmarks
#[component]
pub fn Logos() -> impl IntoView {
    view! {
        <div class="mt-20">
            <p class="text-white/30 text-xs uppercase tracking-[0.2em] font-bold mb-8">"Trusted by teams at"</p>
            <div class="flex flex-wrap items-center justify-center gap-10 md:gap-16 opacity-60">
                {CASE_STUDIES.into_iter().map(|study| view! {
                    <span class=format!("text-2xl md:text-3xl text-white {}", study.logo_style.class())>
                        {study.logo}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}
