//! Lead-capture wizard
//!
//! Four steps of contact details followed by a confirmation view with an
//! embedded scheduling calendar. The wizard state lives in this component,
//! so every time the form is opened it starts from an empty first step.

use leptos::prelude::*;

use crate::core::site::SCHEDULING_URL;
use crate::core::lead::TOTAL_STEPS;
use crate::core::{Advance, LeadForm, LeadWizard, OptIn, TextField, WizardStep};
use crate::ui::common::{CheckboxField, FormField, Overlay, TextAreaField};

#[cfg(not(feature = "ssr"))]
use crate::core::site::LEADS_ENDPOINT;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

/// Modal lead-capture form
#[component]
pub fn LeadCaptureForm(
    /// Callback to close the form
    on_close: Callback<()>,
) -> impl IntoView {
    let wizard = RwSignal::new(LeadWizard::new());

    view! { <LeadWizardOverlay wizard=wizard on_close=on_close/> }
}

/// Step overlay while editing, confirmation overlay once submitted
#[component]
fn LeadWizardOverlay(wizard: RwSignal<LeadWizard>, on_close: Callback<()>) -> impl IntoView {
    let submitted = Memo::new(move |_| wizard.with(|w| w.is_submitted()));

    view! {
        <Show
            when=move || submitted.get()
            fallback=move || {
                view! {
                    <Overlay on_close=on_close label="Get started" panel_class="max-w-lg p-8 md:p-10">
                        <WizardSteps wizard=wizard/>
                    </Overlay>
                }
            }
        >
            <Overlay on_close=on_close label="Thank you" panel_class="max-w-4xl p-8 md:p-10 max-h-[90vh] overflow-y-auto">
                <Confirmation/>
            </Overlay>
        </Show>
    }
}

/// Value signal and input callback bound to one text field of the wizard
fn bind_text(wizard: RwSignal<LeadWizard>, field: TextField) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || wizard.with(|w| w.form().text(field).to_string()));
    let on_input = Callback::new(move |text: String| {
        wizard.update(|w| {
            w.set_text(field, text);
        });
    });
    (value, on_input)
}

fn bind_opt_in(wizard: RwSignal<LeadWizard>, which: OptIn) -> (Signal<bool>, Callback<bool>) {
    let checked = Signal::derive(move || wizard.with(|w| w.form().opt_in(which)));
    let on_change = Callback::new(move |value: bool| {
        wizard.update(|w| {
            w.set_opt_in(which, value);
        });
    });
    (checked, on_change)
}

#[component]
fn WizardSteps(wizard: RwSignal<LeadWizard>) -> impl IntoView {
    let step = Memo::new(move |_| wizard.with(|w| w.step()).unwrap_or(WizardStep::Identity));
    let percent = Memo::new(move |_| wizard.with(|w| w.progress_percent()));
    let can_advance = Memo::new(move |_| wizard.with(|w| w.can_advance()));

    let on_continue = move |_| {
        if let Some(Advance::Submitted(lead)) = wizard.try_update(|w| w.advance()) {
            submit_lead(lead);
        }
    };
    let on_back = move |_| {
        wizard.update(|w| {
            w.back();
        });
    };

    view! {
        // Progress
        <div class="mb-8 pr-12">
            <div class="flex items-center justify-between text-xs font-medium text-white/50 mb-2">
                <span>{move || format!("Step {} of {}", step.get().number(), TOTAL_STEPS)}</span>
                <span>{move || format!("{}%", percent.get())}</span>
            </div>
            <div
                class="h-1.5 w-full bg-white/10 rounded-full overflow-hidden"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent.get().to_string()
            >
                <div
                    class="h-full bg-gradient-to-r from-green-400 to-blue-500 transition-all duration-500"
                    style=move || format!("width: {}%", percent.get())
                ></div>
            </div>
        </div>

        <h2 class="text-2xl md:text-3xl font-bold text-white mb-2">{move || step.get().title()}</h2>
        <p class="text-white/50 mb-8">{move || step.get().subtitle()}</p>

        <div class="space-y-5 mb-10">
            {move || step_fields(wizard, step.get())}
        </div>

        <div class="flex items-center gap-3">
            <Show when=move || step.get().previous().is_some()>
                <button
                    type="button"
                    class="px-6 py-3.5 rounded-xl border border-white/10 text-white/70 font-semibold hover:bg-white/5 hover:text-white transition-colors"
                    on:click=on_back
                >
                    "Back"
                </button>
            </Show>
            <button
                type="button"
                class=move || {
                    if can_advance.get() {
                        "flex-1 py-3.5 rounded-xl font-bold transition-all bg-white text-black hover:bg-neutral-200 active:scale-[0.98]"
                    } else {
                        "flex-1 py-3.5 rounded-xl font-bold transition-all bg-white/10 text-white/30 cursor-not-allowed"
                    }
                }
                disabled=move || !can_advance.get()
                on:click=on_continue
            >
                {move || if step.get().is_last() { "Submit" } else { "Continue" }}
            </button>
        </div>
    }
}

fn step_fields(wizard: RwSignal<LeadWizard>, step: WizardStep) -> AnyView {
    match step {
        WizardStep::Identity => {
            let (first_name, on_first_name) = bind_text(wizard, TextField::FirstName);
            let (email, on_email) = bind_text(wizard, TextField::Email);
            view! {
                <FormField
                    label="First Name"
                    required=true
                    placeholder="Jane"
                    value=first_name
                    on_input=on_first_name
                />
                <FormField
                    label="Email"
                    required=true
                    input_type="email"
                    placeholder="jane@company.com"
                    value=email
                    on_input=on_email
                />
            }
            .into_any()
        }
        WizardStep::Organization => {
            let (company, on_company) = bind_text(wizard, TextField::CompanyName);
            let (role, on_role) = bind_text(wizard, TextField::Role);
            view! {
                <FormField
                    label="Company Name"
                    required=true
                    placeholder="Your company name"
                    value=company
                    on_input=on_company
                />
                <FormField
                    label="Your Role"
                    required=true
                    placeholder="e.g., CTO, Project Manager"
                    value=role
                    on_input=on_role
                />
            }
            .into_any()
        }
        WizardStep::Needs => {
            let (needs, on_needs) = bind_text(wizard, TextField::ProjectNeeds);
            view! {
                <TextAreaField
                    label="How can we help?"
                    required=true
                    placeholder="Describe your project needs..."
                    value=needs
                    on_input=on_needs
                    rows=5
                />
            }
            .into_any()
        }
        WizardStep::Preferences => {
            let (phone, on_phone) = bind_text(wizard, TextField::Phone);
            let (email_opt_in, on_email_opt_in) = bind_opt_in(wizard, OptIn::Email);
            let (sms_opt_in, on_sms_opt_in) = bind_opt_in(wizard, OptIn::Sms);
            view! {
                <FormField
                    label="Phone Number"
                    optional_hint=true
                    input_type="tel"
                    placeholder="+1 (555) 555-5555"
                    value=phone
                    on_input=on_phone
                />
                <div class="space-y-3 pt-2">
                    <CheckboxField
                        label="Opt into email list for exclusive offerings"
                        checked=email_opt_in
                        on_change=on_email_opt_in
                    />
                    <CheckboxField
                        label="Opt into SMS and text messages"
                        checked=sms_opt_in
                        on_change=on_sms_opt_in
                    />
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="text-center mb-8 px-8">
            <h2 class="text-2xl md:text-3xl font-bold text-white mb-4">"Thank you!"</h2>
            <p class="text-white/60 max-w-md mx-auto">
                "We've received your information. Schedule a call with us to discuss your project."
            </p>
        </div>
        <div class="w-full h-[600px] rounded-xl overflow-hidden border border-white/10">
            <iframe
                src=SCHEDULING_URL
                title="Schedule a meeting"
                class="w-full h-full border-0"
                sandbox="allow-scripts allow-same-origin allow-forms allow-popups"
            ></iframe>
        </div>
    }
}

/// Send the completed form to the lead endpoint
///
/// Fire-and-forget: the confirmation view does not depend on the outcome,
/// failures are only logged to the console.
fn submit_lead(lead: LeadForm) {
    #[cfg(not(feature = "ssr"))]
    spawn_local(async move {
        use gloo_net::http::Request;

        match Request::post(LEADS_ENDPOINT).json(&lead) {
            Ok(request) => match request.send().await {
                Ok(response) if response.ok() => {
                    leptos::logging::log!("Lead submitted for {}", lead.email);
                }
                Ok(response) => {
                    leptos::logging::warn!("Lead submission rejected: HTTP {}", response.status());
                }
                Err(err) => {
                    leptos::logging::warn!("Lead submission failed: {err}");
                }
            },
            Err(err) => {
                leptos::logging::warn!("Failed to encode lead: {err}");
            }
        }
    });

    #[cfg(feature = "ssr")]
    {
        let _ = lead;
    }
}
