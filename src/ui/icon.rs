use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under /icons)
    name: &'static str,
    /// CSS classes for sizing and opacity
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const X: &str = "x";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const PLUS: &str = "plus";
    pub const CALENDAR: &str = "calendar";
    pub const PLAY_CIRCLE: &str = "play-circle";
    pub const MAXIMIZE: &str = "maximize";
    pub const SPARKLES: &str = "sparkles";
    pub const LEAF: &str = "leaf";
}
