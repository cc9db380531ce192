//! Top navigation bar with the brand, auth-aware links, and a mobile menu
//! toggle. Navigation remains client-side; backend routes must enforce
//! access control.

use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

/// Renders the application header.
#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let user_name = move || {
        auth.user()
            .map(|user| user.name)
            .unwrap_or_else(|| "User".to_string())
    };

    view! {
        <header class="border-b border-gray-100 bg-white shadow-sm">
            <div class="mx-auto flex max-w-screen-xl flex-wrap items-center justify-between p-4">
                <A
                    href=paths::HOME
                    {..}
                    class="flex items-center gap-2 text-xl font-bold text-[#FF7F50]"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "PetFinder 🐾"
                </A>
                <button
                    type="button"
                    class="inline-flex h-10 w-10 items-center justify-center rounded-lg p-2 text-sm text-gray-500 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 md:hidden"
                    aria-controls="navbar-menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=toggle_menu
                >
                    <span class="sr-only">"Open main menu"</span>
                    <svg
                        class="h-5 w-5"
                        aria-hidden="true"
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 17 14"
                    >
                        <path
                            stroke="currentColor"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M1 1h15M1 7h15M1 13h15"
                        ></path>
                    </svg>
                </button>
                <nav
                    id="navbar-menu"
                    class="w-full md:block md:w-auto"
                    class:hidden=move || !menu_open.get()
                >
                    <ul class="mt-4 flex flex-col gap-1 rounded-lg border border-gray-100 bg-gray-50 p-4 font-medium md:mt-0 md:flex-row md:items-center md:gap-6 md:border-0 md:bg-white md:p-0">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <li>
                                        <A
                                            href=paths::LOGIN
                                            {..}
                                            class="block rounded px-3 py-2 text-[#222222] hover:text-[#FF7F50] md:p-0"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Login"
                                        </A>
                                    </li>
                                    <li>
                                        <A
                                            href=paths::REGISTER
                                            {..}
                                            class="block rounded-full bg-[#FF7F50] px-4 py-2 text-white hover:bg-[#E86A3E]"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Register"
                                        </A>
                                    </li>
                                }
                            }
                        >
                            <li class="px-3 py-2 text-sm text-[#555555] md:p-0">
                                {move || format!("Welcome, {}", user_name())}
                            </li>
                            <li>
                                <A
                                    href=paths::DASHBOARD
                                    {..}
                                    class="block rounded px-3 py-2 text-[#222222] hover:text-[#FF7F50] md:p-0"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Dashboard"
                                </A>
                            </li>
                            <li>
                                {
                                    let navigate = use_navigate();
                                    view! {
                                        <button
                                            type="button"
                                            class="block w-full rounded px-3 py-2 text-left text-[#222222] hover:text-[#FF7F50] md:w-auto md:p-0"
                                            on:click=move |_| {
                                                auth.logout();
                                                navigate(paths::HOME, Default::default());
                                                set_menu_open.set(false);
                                            }
                                        >
                                            "Logout"
                                        </button>
                                    }
                                }
                            </li>
                        </Show>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
