use leptos::prelude::*;

use crate::core::site::{BRAND, BRAND_SUFFIX};

/// Circle-and-diamond mark with the two-line wordmark
#[component]
pub fn BrandMark(
    /// Hover treatment of the circle ("group-hover:scale-105", "group-hover:rotate-12")
    #[prop(default = "group-hover:scale-105")]
    hover: &'static str,
    /// Footer variant uses the larger fixed sizes
    #[prop(default = false)]
    large: bool,
) -> impl IntoView {
    let (circle, diamond, word, suffix) = if large {
        (
            "w-8 h-8",
            "w-4 h-4",
            "text-lg text-white uppercase",
            "text-[10px]",
        )
    } else {
        (
            "w-7 h-7 md:w-8 md:h-8",
            "w-3.5 h-3.5 md:w-4 md:h-4",
            "text-sm md:text-base lg:text-lg",
            "text-[9px] md:text-[10px] lg:text-[11px]",
        )
    };

    view! {
        <div class="flex items-center gap-3 group cursor-pointer">
            <div class=format!("{} bg-white rounded-full flex items-center justify-center transition-transform {}", circle, hover)>
                <div class=format!("{} bg-black rounded-sm transform rotate-45", diamond)></div>
            </div>
            <div class="flex flex-col -space-y-0.5 md:-space-y-1">
                <span class=format!("{} font-bold tracking-tight leading-none", word)>{BRAND}</span>
                <span class=format!("{} font-medium tracking-[0.25em] text-white/40 leading-none", suffix)>
                    {BRAND_SUFFIX}
                </span>
            </div>
        </div>
    }
}
