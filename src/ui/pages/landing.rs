//! Landing page
//!
//! The whole site is this one page:
//! - SEO meta tags
//! - Navbar and hero with the primary calls to action
//! - Mission statement and client wordmarks
//! - Use-case showcase (scroll target of "Use Cases" and "Learn more")
//! - Case studies and footer
//! - Lead-capture form, mounted only while open

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::site::{BRAND, BRAND_SUFFIX, TAGLINE, USE_CASES_ANCHOR};
use crate::ui::lead_form::LeadCaptureForm;
use crate::ui::sections::{CaseStudies, FeatureShowcase, Footer, Hero, Mission, Navbar};

/// Root of the site; owns the lead form visibility
#[component]
pub fn LandingPage() -> impl IntoView {
    let lead_form_open = RwSignal::new(false);

    view! {
        <SeoMeta/>
        <LandingLayout lead_form_open=lead_form_open/>
    }
}

/// Page sections plus the lead form, mounted while `lead_form_open` is set
#[component]
fn LandingLayout(lead_form_open: RwSignal<bool>) -> impl IntoView {
    let open_form = Callback::new(move |_| lead_form_open.set(true));
    let close_form = Callback::new(move |_| lead_form_open.set(false));

    view! {
        <div class="relative min-h-screen bg-black text-white selection:bg-indigo-500/30">
            <BackgroundDecoration/>

            <div class="relative z-10 flex flex-col">
                <Navbar on_get_started=open_form/>

                <section class="min-h-screen flex flex-col items-center justify-center">
                    <Hero on_get_started=open_form/>
                </section>

                <section class="py-24">
                    <Mission/>
                </section>

                <section id=USE_CASES_ANCHOR class="pb-32 scroll-mt-20">
                    <FeatureShowcase/>
                </section>

                <section class="pb-32">
                    <CaseStudies on_get_started=open_form/>
                </section>

                <Footer/>
            </div>

            <Show when=move || lead_form_open.get()>
                <LeadCaptureForm on_close=close_form/>
            </Show>
        </div>
    }
}

/// Fixed, non-interactive gradient layer behind the page
#[component]
fn BackgroundDecoration() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-0 overflow-hidden" aria-hidden="true">
            <div class="absolute -top-40 -left-40 w-[40rem] h-[40rem] bg-green-500/10 rounded-full blur-3xl"></div>
            <div class="absolute top-1/3 -right-40 w-[36rem] h-[36rem] bg-blue-500/10 rounded-full blur-3xl"></div>
            <div class="absolute bottom-0 left-1/4 w-[32rem] h-[32rem] bg-indigo-500/10 rounded-full blur-3xl"></div>
            <div class="absolute inset-0 iridescent-mesh opacity-40"></div>
        </div>
    }
}

/// SEO meta tags for the landing page
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} {} - The AI layer that powers service businesses", BRAND, BRAND_SUFFIX);

    view! {
        <Title text=title.clone()/>

        <Meta name="description" content=TAGLINE/>
        <Meta name="keywords" content="AI automation, service businesses, healthcare AI, AI agents, workflow automation, custom AI tools"/>

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:title" content=title.clone()/>
        <Meta property="og:description" content=TAGLINE/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:title" content=title/>
        <Meta property="twitter:description" content=TAGLINE/>

        <Link rel="icon" type_="image/svg+xml" href="/icons/leaf.svg"/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_meta::provide_meta_context;

    fn render_layout(lead_form_open: bool) -> String {
        Owner::new().with(|| {
            let lead_form_open = RwSignal::new(lead_form_open);
            view! { <LandingLayout lead_form_open=lead_form_open/> }.to_html()
        })
    }

    #[test]
    fn test_page_renders_sections_without_form() {
        let html = Owner::new().with(|| {
            provide_meta_context();
            view! { <LandingPage/> }.to_html()
        });

        assert!(html.contains(r#"id="use-cases""#));
        assert!(html.contains("Healthcare Services"));
        assert!(html.contains("Built with Buildhouse"));
        assert!(!html.contains("Step 1 of 4"));
        assert!(!html.contains(r#"role="dialog""#));
    }

    #[test]
    fn test_open_flag_mounts_fresh_form() {
        let html = render_layout(true);

        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains("Step 1 of 4"));
        assert!(html.contains("Continue"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_closed_flag_unmounts_form() {
        let html = render_layout(false);

        assert!(html.contains("Get started"));
        assert!(!html.contains("Step 1 of 4"));
        assert!(!html.contains(r#"role="dialog""#));
    }
}
