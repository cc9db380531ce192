use crate::components::{DogLoader, LoaderSize, RouteLoader};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders children for signed-in users; everyone else is sent to login
/// once session restoration settles.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.loading.get() && !auth.is_authenticated.get() {
            // UX-only guard; real access control must live on the API.
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! {
        {move || {
            if auth.loading.get() || !auth.is_authenticated.get() {
                view! { <RouteLoader /> }.into_any()
            } else {
                children().into_any()
            }
        }}
    }
}

/// Keeps signed-in users out of the auth pages by sending them to the
/// dashboard instead. The hand-off is brief, so the waiting state is a
/// small loader without the caption.
#[component]
pub fn RedirectIfAuthed(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.loading.get() && auth.is_authenticated.get() {
            navigate(paths::DASHBOARD, Default::default());
        }
    });

    view! {
        {move || {
            if auth.loading.get() || auth.is_authenticated.get() {
                view! {
                    <div class="flex h-[60vh] items-center justify-center">
                        <DogLoader size=LoaderSize::Small show_caption=false />
                    </div>
                }
                    .into_any()
            } else {
                children().into_any()
            }
        }}
    }
}
