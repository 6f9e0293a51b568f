use leptos::prelude::*;

use crate::core::site::{CASE_STUDIES, CaseStudy, LogoMark};
use crate::ui::common::{CtaButton, CtaStyle};
use crate::ui::icon::{Icon, icons};

/// "Built with Buildhouse" testimonials
#[component]
pub fn CaseStudies(
    /// Opens the lead-capture form
    on_get_started: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="w-full max-w-7xl mx-auto px-6 md:px-12 py-12">
            <div class="text-center mb-12 md:mb-16">
                <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-white leading-[1.1] max-w-4xl mx-auto">
                    "Built with Buildhouse"
                </h2>
                <p class="text-base md:text-lg text-white/60 mt-6 max-w-2xl mx-auto leading-relaxed">
                    "We've built complete solutions for the challenges our clients face."
                </p>
            </div>

            <div class="flex flex-col">
                {CASE_STUDIES.into_iter().map(|study| view! {
                    <CaseStudyItem study=study on_get_started=on_get_started/>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CaseStudyItem(study: CaseStudy, on_get_started: Callback<()>) -> impl IntoView {
    let direction = if study.reversed {
        "lg:flex-row-reverse"
    } else {
        "lg:flex-row"
    };

    let mark = match study.logo_mark {
        LogoMark::Leaf => view! {
            <Icon name=icons::LEAF class="w-14 h-14 md:w-16 md:h-16"/>
        }
        .into_any(),
        LogoMark::Orb(color) => view! {
            <div
                class="w-12 h-12 rounded-full"
                style=format!("background-color: {color}; box-shadow: 0 0 15px {color}66;")
            ></div>
        }
        .into_any(),
    };

    view! {
        <div class=format!("flex flex-col {} items-center gap-12 lg:gap-24 py-16 md:py-28", direction)>
            // Quote, stats and action
            <div class="flex-1 space-y-10">
                <h3 class="text-3xl md:text-5xl font-bold leading-[1.1] text-white max-w-xl tracking-tight">
                    {format!("\"{}\"", study.quote)}
                </h3>

                <div class="flex gap-12 md:gap-16">
                    {study.stats.into_iter().map(|stat| view! {
                        <div class="space-y-1">
                            <p class="text-4xl md:text-5xl font-bold text-white tracking-tighter">{stat.value}</p>
                            <p class="text-white/40 text-[10px] md:text-xs uppercase tracking-[0.2em] font-black">{stat.label}</p>
                        </div>
                    }).collect_view()}
                </div>

                <CtaButton style=CtaStyle::Dark on_click=on_get_started>
                    "Get started"
                </CtaButton>
            </div>

            // Logo card
            <div class="flex-1 w-full flex justify-center lg:justify-end">
                <div class="relative w-full max-w-[440px] aspect-square rounded-[2.5rem] overflow-hidden group border border-white/5 shadow-2xl transition-all duration-700 hover:scale-[1.02] hover:shadow-white/5 flex items-center justify-center">
                    <div class=format!("absolute inset-0 opacity-90 group-hover:opacity-100 transition-opacity duration-700 {}", study.gradient)></div>

                    <div class="relative z-10 flex items-center gap-4 transition-transform duration-700 group-hover:scale-105">
                        <div class="drop-shadow-2xl flex items-center justify-center">{mark}</div>
                        <span class=format!("text-4xl md:text-5xl tracking-tight text-white drop-shadow-xl {}", study.logo_style.class())>
                            {study.logo}
                        </span>
                    </div>

                    <div class="absolute bottom-0 left-0 right-0 h-1/2 bg-gradient-to-t from-black/20 to-transparent pointer-events-none"></div>
                </div>
            </div>
        </div>
    }
}
