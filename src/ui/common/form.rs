use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 border border-white/10 rounded-xl text-white placeholder-white/30 focus:outline-none focus:border-white/30 transition-colors";

/// Label line shared by the text inputs
#[component]
fn FieldLabel(label: &'static str, required: bool, optional_hint: bool) -> impl IntoView {
    view! {
        <span class="block text-sm font-medium text-white/80 mb-2">
            {label}
            {required.then(|| view! { " *" })}
            {optional_hint.then(|| view! { " " <span class="text-white/40">"(Optional)"</span> })}
        </span>
    }
}

/// Single-line text input with label
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Show an "(Optional)" hint after the label
    #[prop(default = false)]
    optional_hint: bool,
    /// Input type (text, email, tel)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required optional_hint=optional_hint/>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line text input with label
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel label=label required=required optional_hint=false/>
            <textarea
                class=format!("{} resize-none", INPUT_CLASS)
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Checkbox with inline label
#[component]
pub fn CheckboxField(
    /// Field label text
    label: &'static str,
    /// Current checked state
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 cursor-pointer">
            <input
                type="checkbox"
                class="w-4 h-4 rounded border-white/20 bg-white/5 text-white focus:ring-2 focus:ring-white/20"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="text-sm text-white/70">{label}</span>
        </label>
    }
}
