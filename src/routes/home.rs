//! Marketing landing page. Everything here is static copy; the only state
//! consulted is whether a session exists, which swaps the calls to action
//! for a dashboard link.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

use super::paths;

/// Feature cards for the "How It Works" section.
const FEATURES: [(&str, &str, &str, &str, &str); 3] = [
    (
        "📝",
        "Register & Login",
        "Create an account to access all features and report lost pets.",
        "Create Account",
        paths::REGISTER,
    ),
    (
        "🔍",
        "Dashboard Access",
        "Get access to your personalized dashboard after login.",
        "Sign In",
        paths::LOGIN,
    ),
    (
        "🤝",
        "Community Help",
        "Join our community to help pet owners find their lost pets.",
        "Join Community",
        paths::REGISTER,
    ),
];

/// Headline numbers shown inside the hero.
const HERO_STATS: [(&str, &str); 3] = [
    ("Pets Found", "5,243"),
    ("Members", "10,892"),
    ("Success Rate", "95%"),
];

/// Platform-wide numbers for the statistics band.
const PLATFORM_STATS: [(&str, &str); 4] = [
    ("Pets Found", "+500"),
    ("Active Users", "+1,200"),
    ("Cities Covered", "+50"),
    ("Success Rate", "98%"),
];

/// Reunion stories for the "Success Stories" section.
const TESTIMONIALS: [(&str, &str, &str, &str); 2] = [
    (
        "🐕",
        "Max's Return",
        "Sarah Johnson, New York",
        "\"I lost Max during a storm and was devastated. Thanks to PetFinder, someone spotted him 3 miles away and contacted me immediately. We were reunited within hours!\"",
    ),
    (
        "🐈",
        "Luna's Journey Home",
        "David Martinez, Los Angeles",
        "\"Luna slipped out of our apartment and disappeared. Thanks to the amazing community on PetFinder, she was found safe and sound at a neighbor's garage. So grateful!\"",
    ),
];

const FOOTER_RESOURCES: [&str; 4] = [
    "Pet Care Tips",
    "Lost Pet Guide",
    "Community Forums",
    "FAQs",
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("facebook", "📘"),
    ("twitter", "🐦"),
    ("instagram", "📷"),
    ("youtube", "🎥"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <div class="bg-white">
            <section class="bg-gradient-to-b from-orange-50 to-white px-6 pb-16 pt-12">
                <div class="mx-auto flex max-w-6xl flex-col items-center gap-12 md:flex-row">
                    <div class="flex-1">
                        <span class="inline-flex items-center gap-2 rounded-full bg-[#FF7F50]/10 px-4 py-1.5 text-sm font-medium text-[#E86A3E]">
                            <span>"🐾"</span>
                            <span>"Reuniting pets with their families"</span>
                        </span>
                        <h1 class="mt-5 text-4xl font-extrabold leading-tight text-[#222222] md:text-5xl">
                            "Find Your Lost " <span class="text-[#FF7F50]">"Pet"</span>
                            " With Our Community"
                        </h1>
                        <p class="mt-5 max-w-xl text-lg text-[#555555]">
                            "PetFinder helps reunite lost pets with their owners through our community-driven platform for reporting and finding missing pets."
                        </p>
                        <div class="mt-7 flex flex-wrap gap-3">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <A
                                            href=paths::REGISTER
                                            {..}
                                            class="rounded-lg bg-[#FF7F50] px-6 py-3 text-sm font-medium text-white hover:bg-[#E86A3E]"
                                        >
                                            "Report Missing Pet"
                                        </A>
                                        <A
                                            href=paths::LOGIN
                                            {..}
                                            class="rounded-lg border border-[#FF7F50] px-6 py-3 text-sm font-medium text-[#FF7F50] hover:bg-orange-50"
                                        >
                                            "Sign In"
                                        </A>
                                    }
                                }
                            >
                                <A
                                    href=paths::DASHBOARD
                                    {..}
                                    class="rounded-lg bg-[#FF7F50] px-6 py-3 text-sm font-medium text-white hover:bg-[#E86A3E]"
                                >
                                    "View Dashboard"
                                </A>
                            </Show>
                        </div>
                        <div class="mt-10 grid max-w-md grid-cols-3 gap-4 rounded-xl border border-orange-100 bg-white p-4 shadow-sm">
                            {HERO_STATS
                                .iter()
                                .map(|(title, value)| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-xl font-bold text-[#222222]">{*value}</div>
                                            <div class="text-xs text-[#888888]">{*title}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="hidden flex-1 items-center justify-center md:flex" aria-hidden="true">
                        <div class="flex h-72 w-72 items-center justify-center rounded-full bg-orange-100 text-[10rem]">
                            "🐶"
                        </div>
                    </div>
                </div>
            </section>

            <section class="px-6 py-16">
                <div class="mx-auto max-w-6xl">
                    <SectionTitle
                        title="How It Works"
                        subtitle="Our platform makes it easy to find lost pets and reunite them with their owners"
                    />
                    <div class="grid gap-6 md:grid-cols-3">
                        {FEATURES
                            .iter()
                            .map(|(icon, title, description, link_text, link_target)| {
                                view! {
                                    <div class="rounded-xl border border-gray-100 bg-white p-6 shadow-sm transition hover:-translate-y-1 hover:shadow-md">
                                        <div class="mb-4 flex h-14 w-14 items-center justify-center rounded-full bg-orange-50 text-3xl">
                                            {*icon}
                                        </div>
                                        <h3 class="text-lg font-semibold text-[#222222]">{*title}</h3>
                                        <p class="mb-4 mt-2 text-sm text-[#555555]">{*description}</p>
                                        <A
                                            href=*link_target
                                            {..}
                                            class="text-sm font-medium text-[#3498DB] hover:underline"
                                        >
                                            {*link_text}
                                        </A>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="bg-[#F9F9F9] px-6 py-14">
                <div class="mx-auto grid max-w-4xl grid-cols-2 gap-8 text-center sm:grid-cols-4">
                    {PLATFORM_STATS
                        .iter()
                        .map(|(title, value)| {
                            view! {
                                <div>
                                    <div class="text-3xl font-bold text-[#333333]">{*value}</div>
                                    <div class="mt-1 text-sm text-[#888888]">{*title}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="px-6 py-16">
                <div class="mx-auto max-w-6xl">
                    <SectionTitle
                        title="Success Stories"
                        subtitle="Read how PetFinder has helped reunite pets with their families"
                    />
                    <div class="grid gap-6 md:grid-cols-2">
                        {TESTIMONIALS
                            .iter()
                            .map(|(emoji, name, location, quote)| {
                                view! {
                                    <div class="rounded-xl border border-gray-100 bg-white p-6 shadow-sm">
                                        <div class="mb-4 flex items-center gap-4">
                                            <span class="flex h-12 w-12 items-center justify-center rounded-full bg-orange-50 text-2xl">
                                                {*emoji}
                                            </span>
                                            <div>
                                                <h3 class="font-semibold text-[#222222]">{*name}</h3>
                                                <p class="text-sm text-[#888888]">{*location}</p>
                                            </div>
                                        </div>
                                        <p class="text-sm italic text-[#555555]">{*quote}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <Show when=move || !is_authenticated.get()>
                <section class="bg-gradient-to-b from-white to-orange-50 px-6 py-16">
                    <div class="mx-auto max-w-2xl text-center">
                        <h2 class="text-3xl font-bold text-[#222222]">
                            "Ready to find your lost pet?"
                        </h2>
                        <p class="mt-4 text-lg text-[#555555]">
                            "Join our community today and increase the chances of finding your pet or help others find theirs."
                        </p>
                        <div class="mt-8 flex flex-wrap justify-center gap-3">
                            <A
                                href=paths::REGISTER
                                {..}
                                class="rounded-lg bg-[#FF7F50] px-6 py-3 text-sm font-medium text-white hover:bg-[#E86A3E]"
                            >
                                "Sign Up Now"
                            </A>
                            <A
                                href=paths::LOGIN
                                {..}
                                class="rounded-lg border border-gray-300 px-6 py-3 text-sm font-medium text-[#222222] hover:bg-gray-50"
                            >
                                "Sign In"
                            </A>
                        </div>
                    </div>
                </section>
            </Show>

            <PageFooter />
        </div>
    }
}

/// Centered heading and subtitle above a landing section.
#[component]
fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-12 text-center">
            <h2 class="text-3xl font-bold text-[#222222]">{title}</h2>
            <p class="mx-auto mt-3 max-w-xl text-lg text-[#555555]">{subtitle}</p>
        </div>
    }
}

/// Site footer with navigation, contact details, and the build hash.
#[component]
fn PageFooter() -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <footer class="bg-[#222222] px-6 py-12 text-white">
            <div class="mx-auto max-w-6xl">
                <div class="grid gap-10 sm:grid-cols-2 lg:grid-cols-4">
                    <div>
                        <A href=paths::HOME {..} class="text-xl font-bold text-[#FF7F50]">
                            "PetFinder 🐾"
                        </A>
                        <p class="mt-3 text-sm text-white/65">
                            "Helping reunite lost pets with their families through our community-driven platform."
                        </p>
                    </div>
                    <div>
                        <h3 class="mb-4 font-semibold">"Quick Links"</h3>
                        <ul class="space-y-2 text-sm">
                            <li>
                                <A href=paths::HOME {..} class="text-white/65 hover:text-white">
                                    "Home"
                                </A>
                            </li>
                            <li>
                                <A href=paths::DASHBOARD {..} class="text-white/65 hover:text-white">
                                    "Dashboard"
                                </A>
                            </li>
                            <li>
                                <A href=paths::REGISTER {..} class="text-white/65 hover:text-white">
                                    "Sign Up"
                                </A>
                            </li>
                            <li>
                                <A href=paths::LOGIN {..} class="text-white/65 hover:text-white">
                                    "Login"
                                </A>
                            </li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="mb-4 font-semibold">"Resources"</h3>
                        <ul class="space-y-2 text-sm">
                            {FOOTER_RESOURCES
                                .iter()
                                .map(|label| {
                                    view! {
                                        <li>
                                            <a href="#" class="text-white/65 hover:text-white">
                                                {*label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="mb-4 font-semibold">"Contact Us"</h3>
                        <ul class="space-y-2 text-sm text-white/65">
                            <li>"Email: support@petfinder.com"</li>
                            <li>"Phone: (123) 456-7890"</li>
                            <li>"Address: 123 Pet Street, Animal City"</li>
                        </ul>
                    </div>
                </div>
                <div class="mt-10 flex flex-col items-center justify-between gap-4 border-t border-white/10 pt-6 sm:flex-row">
                    <p class="text-sm text-white/65">"© 2025 PetFinder. All rights reserved."</p>
                    <p class="font-mono text-[10px] uppercase tracking-tighter text-white/40">
                        {commit}
                    </p>
                    <div class="flex gap-4 text-lg">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(label, icon)| {
                                view! {
                                    <a href="#" aria-label=*label class="hover:opacity-80">
                                        {*icon}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
