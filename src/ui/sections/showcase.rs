//! Use-case showcase
//!
//! Industry tabs over a horizontally scrolling strip of cards. Regular cards
//! open a simulated product demo; the call-to-action card opens a prompt to
//! book a call.

use leptos::prelude::*;

use crate::core::site::DEMO_HOST;
use crate::core::{Feature, FeatureOverlay, Industry, ScrollDirection, ShowcaseState};
use crate::ui::common::{CtaButton, CtaStyle, Overlay, TabItem, Tabs, scroll_strip};
use crate::ui::icon::{Icon, icons};

const STRIP_ID: &str = "use-case-cards";

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let state = RwSignal::new(ShowcaseState::new());
    let cards = Memo::new(move |_| state.with(|s| s.cards()));
    let overlay = Memo::new(move |_| state.with(|s| s.overlay));
    let strip = NodeRef::<leptos::html::Div>::new();

    let tabs: Vec<TabItem> = Industry::ALL
        .iter()
        .map(|industry| TabItem::new(industry.slug(), industry.label()))
        .collect();
    let active_tab = Signal::derive(move || state.with(|s| s.active.slug()));
    let on_tab_change = Callback::new(move |id: &'static str| {
        if let Some(industry) = Industry::from_slug(id) {
            state.update(|s| s.select(industry));
        }
    });

    let on_open = Callback::new(move |feature: &'static Feature| {
        state.update(|s| {
            s.open(feature);
        });
    });
    let on_close = Callback::new(move |_| state.update(|s| s.dismiss()));

    view! {
        <div class="w-full max-w-7xl mx-auto px-6 md:px-12">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-6 mb-8">
                <h2 class="text-3xl md:text-5xl font-bold tracking-tight">"Use Cases"</h2>
                <div class="flex items-center gap-3">
                    <ScrollButton strip=strip direction=ScrollDirection::Left/>
                    <ScrollButton strip=strip direction=ScrollDirection::Right/>
                </div>
            </div>

            <Tabs tabs=tabs active_tab=active_tab on_change=on_tab_change controls=STRIP_ID/>

            <div
                node_ref=strip
                id=STRIP_ID
                role="tabpanel"
                class="flex gap-6 overflow-x-auto pb-8 scrollbar-hide no-scrollbar"
                style="scrollbar-width: none; -ms-overflow-style: none;"
            >
                <div class="flex-shrink-0 w-4 md:w-0"></div>
                {move || {
                    cards
                        .get()
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature on_open=on_open/> })
                        .collect_view()
                }}
                <div class="flex-shrink-0 w-4 md:w-0"></div>
            </div>

            {move || overlay.get().map(|overlay| match overlay {
                FeatureOverlay::Demo(feature) => {
                    view! { <DemoOverlay feature=feature on_close=on_close/> }.into_any()
                }
                FeatureOverlay::Schedule(_) => {
                    view! { <ScheduleOverlay on_close=on_close/> }.into_any()
                }
            })}
        </div>
    }
}

#[component]
fn ScrollButton(strip: NodeRef<leptos::html::Div>, direction: ScrollDirection) -> impl IntoView {
    let icon = match direction {
        ScrollDirection::Left => icons::CHEVRON_LEFT,
        ScrollDirection::Right => icons::CHEVRON_RIGHT,
    };

    view! {
        <button
            type="button"
            class="p-3 rounded-full bg-white/5 border border-white/10 hover:bg-white/10 transition-colors opacity-60 hover:opacity-100"
            aria-label=direction.aria_label()
            aria-controls=STRIP_ID
            on:click=move |_| scroll_strip(strip, direction)
        >
            <Icon name=icon class="w-5 h-5"/>
        </button>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature, on_open: Callback<&'static Feature>) -> impl IntoView {
    let is_schedule = feature.is_schedule();
    let (corner_icon, footer_icon, footer_text) = if is_schedule {
        (icons::CALENDAR, icons::CALENDAR, "Book an appointment")
    } else {
        (icons::PLUS, icons::PLAY_CIRCLE, "Click to see demo")
    };
    let ring = if is_schedule { "ring-1 ring-white/20" } else { "" };

    view! {
        <div
            class=format!(
                "relative flex-shrink-0 w-[300px] md:w-[380px] aspect-[4/5] rounded-3xl overflow-hidden group cursor-pointer border border-white/5 transition-all duration-500 hover:scale-[1.02] hover:shadow-2xl hover:shadow-white/5 {}",
                ring,
            )
            role="button"
            tabindex="0"
            aria-label=feature.title
            on:click=move |_| on_open.run(feature)
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_open.run(feature);
                }
            }
        >
            // Mesh background
            <div class=format!(
                "absolute inset-0 opacity-70 group-hover:opacity-100 transition-opacity duration-700 {}",
                feature.gradient,
            )></div>

            <div class="absolute top-6 right-6 w-8 h-8 rounded-full bg-white/20 backdrop-blur-md border border-white/20 flex items-center justify-center transition-transform duration-300 group-hover:rotate-90">
                <Icon name=corner_icon class="w-[18px] h-[18px]"/>
            </div>

            <div class="absolute bottom-0 left-0 right-0 p-8 pt-20 bg-gradient-to-t from-black/90 via-black/40 to-transparent">
                <h3 class="text-xl md:text-2xl font-bold text-white mb-3 leading-tight">{feature.title}</h3>
                <p class="text-sm md:text-base text-white/60 leading-relaxed font-medium line-clamp-2 mb-6 group-hover:text-white/80 transition-colors">
                    {feature.description}
                </p>

                <div class="pt-4 border-t border-white/10 flex items-center justify-between text-[11px] uppercase tracking-[0.1em] font-bold text-white/40 group-hover:text-white transition-colors">
                    <span>{footer_text}</span>
                    <Icon name=footer_icon class="w-3.5 h-3.5 opacity-40 group-hover:opacity-100"/>
                </div>
            </div>
        </div>
    }
}

/// Simulated product demo for a regular card
#[component]
fn DemoOverlay(feature: &'static Feature, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Overlay
            on_close=on_close
            label=feature.title
            panel_class="max-w-6xl flex flex-col md:flex-row h-[90vh] md:h-auto max-h-[850px]"
        >
            // Demo area
            <div class=format!(
                "relative flex-[1.6] {} flex items-center justify-center overflow-hidden min-h-[350px] md:min-h-[500px]",
                feature.gradient,
            )>
                <div class="absolute inset-0 bg-black/20"></div>
                <DemoMockup feature=feature/>
                <div class="absolute bottom-4 left-0 right-0 text-center opacity-30 pointer-events-none select-none">
                    <span class="text-white text-7xl md:text-9xl font-bold tracking-tighter italic opacity-10 uppercase">
                        "Simulation"
                    </span>
                </div>
            </div>

            // Text side
            <div class="flex-1 p-8 md:p-12 flex flex-col justify-center bg-[#080808] border-l border-white/5">
                <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-indigo-500/10 border border-indigo-500/20 text-indigo-400 text-[10px] font-bold uppercase tracking-wider mb-8 w-fit">
                    <Icon name=icons::PLAY_CIRCLE class="w-3 h-3"/>
                    "Live Demo Instance"
                </div>

                <h2 class="text-2xl md:text-4xl font-bold text-white mb-6 leading-tight tracking-tight">
                    {feature.title}
                </h2>

                <p class="text-base md:text-lg text-white/50 leading-relaxed mb-10 font-medium">
                    {feature.description}
                    " We've built a robust architecture to handle high-concurrency requests while maintaining sub-millisecond latency."
                    <br/>
                    <br/>
                    "Explore how our AI models interpret complex datasets to provide the clarity your operations require."
                </p>

                <div class="mt-auto flex flex-col gap-4">
                    <CtaButton style=CtaStyle::Solid class="text-sm md:text-base">
                        "Start Building Now"
                    </CtaButton>
                    <p class="text-center text-[10px] text-white/20 uppercase tracking-widest font-bold">
                        "Available on Enterprise Tier"
                    </p>
                </div>
            </div>
        </Overlay>
    }
}

/// Decorative product window; no real data
#[component]
fn DemoMockup(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="relative z-10 w-[92%] h-[85%] bg-black/40 backdrop-blur-3xl border border-white/20 rounded-3xl shadow-[0_32px_64px_-12px_rgba(0,0,0,0.5)] flex flex-col overflow-hidden group/demo">
            // Window chrome
            <div class="w-full h-12 bg-white/5 border-b border-white/10 flex items-center px-6 gap-2">
                <div class="flex gap-1.5">
                    <div class="w-2.5 h-2.5 rounded-full bg-red-500/40"></div>
                    <div class="w-2.5 h-2.5 rounded-full bg-yellow-500/40"></div>
                    <div class="w-2.5 h-2.5 rounded-full bg-green-500/40"></div>
                </div>
                <div class="mx-auto bg-white/5 px-4 py-1 rounded-md text-[10px] text-white/30 font-mono">
                    {format!("{}/{}", DEMO_HOST, feature.demo_slug())}
                </div>
            </div>

            <div class="flex-1 p-8 flex flex-col gap-6">
                <div class="flex items-center justify-between">
                    <div class="h-6 w-48 bg-white/10 rounded-full animate-pulse"></div>
                    <div class="h-8 w-8 rounded-lg bg-white/5 border border-white/10 flex items-center justify-center">
                        <Icon name=icons::MAXIMIZE class="w-3.5 h-3.5 opacity-40"/>
                    </div>
                </div>

                <div class="grid grid-cols-12 gap-6 flex-1">
                    <div class="col-span-8 bg-white/5 rounded-2xl border border-white/5 p-6 flex flex-col gap-4 relative overflow-hidden">
                        <div class="absolute inset-0 bg-gradient-to-br from-white/5 to-transparent"></div>
                        <div class="h-4 w-3/4 bg-white/10 rounded-full"></div>
                        <div class="h-4 w-1/2 bg-white/5 rounded-full"></div>
                        <div class="mt-auto h-32 w-full bg-white/5 rounded-xl border border-white/5 animate-pulse"></div>
                    </div>
                    <div class="col-span-4 flex flex-col gap-4">
                        <div class="h-24 bg-white/5 rounded-2xl border border-white/5 animate-pulse"></div>
                        <div class="h-24 bg-white/5 rounded-2xl border border-white/5 animate-pulse delay-75"></div>
                        <div class="flex-1 bg-indigo-500/5 rounded-2xl border border-indigo-500/10 p-4">
                            <div class="h-3 w-full bg-indigo-400/20 rounded-full mb-2"></div>
                            <div class="h-3 w-2/3 bg-indigo-400/20 rounded-full"></div>
                        </div>
                    </div>
                </div>
            </div>

            // Play button on hover
            <div class="absolute inset-0 flex items-center justify-center bg-black/20 opacity-0 group-hover/demo:opacity-100 transition-opacity duration-500 cursor-pointer">
                <div class="w-20 h-20 rounded-full bg-white/10 backdrop-blur-xl border border-white/20 flex items-center justify-center scale-90 group-hover/demo:scale-100 transition-transform">
                    <Icon name=icons::PLAY_CIRCLE class="w-10 h-10"/>
                </div>
            </div>
        </div>
    }
}

/// Prompt shown for the call-to-action card
#[component]
fn ScheduleOverlay(on_close: Callback<()>) -> impl IntoView {
    view! {
        <Overlay on_close=on_close label="Schedule a call" panel_class="max-w-2xl p-8 md:p-12 text-center">
            <div class="w-20 h-20 bg-indigo-600 rounded-2xl flex items-center justify-center mx-auto mb-8 shadow-xl shadow-indigo-600/20">
                <Icon name=icons::CALENDAR class="w-10 h-10"/>
            </div>
            <h2 class="text-3xl md:text-5xl font-bold text-white mb-6">"Let's build together"</h2>
            <p class="text-white/50 text-lg mb-10 max-w-md mx-auto">
                "Schedule a free discovery call to explore how our specialized AI builds can transform your business workflows."
            </p>
            <CtaButton style=CtaStyle::Solid>"Schedule a free Call"</CtaButton>
        </Overlay>
    }
}
