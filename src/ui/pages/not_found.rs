//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::site::{BRAND, BRAND_SUFFIX};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold mb-4 bg-gradient-to-r from-green-400 to-blue-500 bg-clip-text text-transparent">
                    "404"
                </h1>

                // Title
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                // Description
                <p class="text-white/50 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-8 py-3.5 bg-white text-black rounded-full font-bold hover:bg-neutral-200 transition-colors"
                >
                    "Go Home"
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-white/30">{format!("© 2025 {} {}", BRAND, BRAND_SUFFIX)}</p>
            </div>
        </div>
    }
}
