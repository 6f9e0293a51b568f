use leptos::prelude::*;

/// Visual treatment of a call-to-action button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaStyle {
    /// Green-to-blue gradient pill (hero primary action)
    Gradient,
    /// Translucent pill with green outline
    Outline,
    /// Small frosted pill used in the navbar
    Glass,
    /// Near-black pill used under case studies
    Dark,
    /// Full-width white block used inside overlays
    Solid,
}

impl CtaStyle {
    fn class(&self) -> &'static str {
        match self {
            CtaStyle::Gradient => {
                "w-full sm:w-auto px-8 py-3.5 md:py-4 bg-gradient-to-r from-green-400 to-blue-500 text-white rounded-full font-bold text-sm md:text-base hover:from-green-500 hover:to-blue-600 transition-all shadow-lg shadow-green-500/20 active:scale-95"
            }
            CtaStyle::Outline => {
                "w-full sm:w-auto px-8 py-3.5 md:py-4 bg-white/5 border border-green-500/30 text-white rounded-full font-bold text-sm md:text-base hover:bg-green-500/10 hover:border-green-500/50 transition-all backdrop-blur-md active:scale-95"
            }
            CtaStyle::Glass => {
                "px-4 py-2 md:px-5 md:py-2.5 bg-white/10 border border-white/10 hover:border-white/30 hover:bg-white/20 rounded-full text-xs md:text-sm font-semibold transition-all backdrop-blur-sm"
            }
            CtaStyle::Dark => {
                "px-8 py-3.5 bg-neutral-900 border border-white/10 hover:border-white/20 text-white rounded-full text-sm font-bold transition-all hover:bg-neutral-800 active:scale-95"
            }
            CtaStyle::Solid => {
                "w-full py-4 bg-white text-black rounded-2xl font-bold hover:bg-neutral-200 transition-all active:scale-[0.98]"
            }
        }
    }
}

/// Call-to-action button
///
/// Without `on_click` the button is decorative.
#[component]
pub fn CtaButton(
    /// Visual style
    #[prop(default = CtaStyle::Gradient)]
    style: CtaStyle,
    /// Click handler
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    /// Button content
    children: Children,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        style.class().to_string()
    } else {
        format!("{} {}", style.class(), class)
    };

    view! {
        <button
            type="button"
            class=full_classes
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
