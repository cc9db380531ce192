//! 404 fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use super::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex h-[70vh] flex-col items-center justify-center px-5 text-center">
            <h1 class="text-8xl font-black text-[#E74C3C]">"404"</h1>
            <h2 class="mt-2 text-2xl font-semibold text-[#222222]">"Page Not Found"</h2>
            <p class="mb-6 mt-2 text-[#555555]">
                "We couldn't find the page you're looking for."
            </p>
            <A
                href=paths::HOME
                {..}
                class="rounded-lg bg-[#3498DB] px-5 py-2.5 text-sm font-medium text-white hover:bg-[#2874A6]"
            >
                "Back to Home"
            </A>
        </div>
    }
}
