//! Full-screen loader overlay shown while navigating between the primary
//! routes. Purely cosmetic: content mounts underneath and the overlay
//! clears itself on a timer.

use crate::components::animations::{DogLoader, LoaderSize};
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// How long the overlay covers the page after navigation (milliseconds).
const TRANSITION_MS: u32 = 3_000;

/// Routes that show the overlay when navigated to.
const ROUTES_WITH_LOADER: [&str; 4] = [paths::HOME, paths::LOGIN, paths::REGISTER, paths::DASHBOARD];

fn shows_loader(path: &str) -> bool {
    ROUTES_WITH_LOADER
        .iter()
        .any(|route| path == *route || path.starts_with(&format!("{route}/")))
}

/// Wraps routed content and flashes the dog loader on route changes.
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let location = use_location();
    let (covering, set_covering) = signal(false);
    // Stale timers from rapid navigation must not clear a newer overlay.
    let generation = StoredValue::new(0_u64);

    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();

        if let Some(previous_path) = previous {
            if previous_path != path && shows_loader(&path) {
                let stamp = generation.get_value() + 1;
                generation.set_value(stamp);
                set_covering.set(true);

                Timeout::new(TRANSITION_MS, move || {
                    if generation.get_value() == stamp {
                        set_covering.set(false);
                    }
                })
                .forget();
            }
        }

        path
    });

    view! {
        <Show when=move || covering.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-white/95 backdrop-blur-sm">
                <DogLoader size=LoaderSize::Large show_caption=true />
            </div>
        </Show>
        {children()}
    }
}
