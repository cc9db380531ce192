//! Decorative search illustration for the dashboard.

use leptos::prelude::*;

/// Paw prints under a pulsing magnifier.
#[component]
pub fn FindPetAnimation() -> impl IntoView {
    view! {
        <div class="relative h-48 w-48" aria-hidden="true">
            <div class="absolute inset-0 flex items-center justify-center text-7xl opacity-80">
                "🐾"
            </div>
            <div class="absolute inset-0 flex animate-ping items-center justify-center text-5xl opacity-50">
                "🔍"
            </div>
            <div class="absolute inset-0 flex items-center justify-center text-5xl">"🔍"</div>
        </div>
    }
}
