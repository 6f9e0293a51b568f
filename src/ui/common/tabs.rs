use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
}

impl TabItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Horizontally scrolling row of pill tabs
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    active_tab: Signal<&'static str>,
    /// Callback when tab is changed
    on_change: Callback<&'static str>,
    /// Id of the element the tabs control
    #[prop(optional)]
    controls: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class="flex items-center gap-2 overflow-x-auto no-scrollbar pb-10 border-b border-white/5 mb-10"
            role="tablist"
        >
            {tabs.into_iter().map(|tab| {
                let is_active = Signal::derive(move || active_tab.get() == tab.id);

                let tab_class = move || {
                    if is_active.get() {
                        "px-5 py-2.5 rounded-full whitespace-nowrap text-sm font-semibold transition-all duration-300 bg-white text-black shadow-lg shadow-white/10 scale-105"
                    } else {
                        "px-5 py-2.5 rounded-full whitespace-nowrap text-sm font-semibold transition-all duration-300 text-white/40 hover:text-white/70 bg-white/5 border border-white/5 hover:border-white/20"
                    }
                };

                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| on_change.run(tab.id)
                        role="tab"
                        id=format!("tab-{}", tab.id)
                        aria-selected=move || is_active.get().to_string()
                        aria-controls=controls
                    >
                        {tab.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
