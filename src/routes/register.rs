use crate::app_lib::theme::Theme;
use crate::components::{Button, SideDogAnimation, SidePosition, Spinner, use_toasts};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::RegisterRequest;
use crate::features::auth::validate;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::paths;

#[derive(Clone)]
struct RegisterInput {
    name: String,
    email: String,
    password: String,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    // The confirmation never leaves the form; only the checked password is
    // sent to the API.
    let register_action = Action::new_local(move |input: &RegisterInput| {
        let request = RegisterRequest {
            name: input.name.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        };
        async move { auth.register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    toasts.success("Registered successfully!");
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => toasts.error(err.user_message()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = validate::normalize_email(&email.get_untracked());
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if name_value.is_empty() {
            set_form_error.set(Some("Please enter your name".to_string()));
            return;
        }
        if let Err(err) = validate::check_email(&email_value) {
            set_form_error.set(Some(err.user_message()));
            return;
        }
        if let Err(err) = validate::check_new_password(&password_value, &confirm_value) {
            set_form_error.set(Some(err.user_message()));
            return;
        }

        register_action.dispatch(RegisterInput {
            name: name_value,
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="relative min-h-[calc(100vh-4rem)] bg-white px-6 py-10">
            <div class="absolute left-4 top-4">
                <A href=paths::HOME {..} class=Theme::BACK_LINK>
                    "← Back to Home"
                </A>
            </div>
            <div class="mx-auto flex max-w-5xl flex-col items-center gap-10 pt-12 md:flex-row">
                <div class="hidden flex-1 flex-col items-center md:flex">
                    <SideDogAnimation position=SidePosition::Left />
                    <div class="mt-4 text-center">
                        <h2 class="text-xl font-semibold text-[#222222]">"Join PetFinder"</h2>
                        <p class="mt-1 text-[#555555]">
                            "Help reunite lost pets with their families"
                        </p>
                    </div>
                </div>
                <div class="w-full max-w-md flex-1">
                    <div class=Theme::AUTH_CARD>
                        <div class="mb-6 text-center">
                            <h1 class=Theme::PAGE_TITLE>"Create Account"</h1>
                            <p class=Theme::PAGE_SUBTITLE>
                                "Join our community to help find lost pets"
                            </p>
                        </div>
                        <form on:submit=on_submit>
                            <div class="mb-4">
                                <label class=Theme::LABEL for="name">
                                    "Name"
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    class=Theme::INPUT
                                    autocomplete="name"
                                    placeholder="Full Name"
                                    required
                                    on:input=move |event| set_name.set(event_target_value(&event))
                                />
                            </div>
                            <div class="mb-4">
                                <label class=Theme::LABEL for="email">
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class=Theme::INPUT
                                    autocomplete="email"
                                    placeholder="Email"
                                    required
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                            </div>
                            <div class="mb-4">
                                <label class=Theme::LABEL for="password">
                                    "Password"
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class=Theme::INPUT
                                    autocomplete="new-password"
                                    placeholder="Password"
                                    required
                                    on:input=move |event| {
                                        set_password.set(event_target_value(&event))
                                    }
                                />
                                <p class=Theme::HELP_TEXT>
                                    "Password must be at least 6 characters"
                                </p>
                            </div>
                            <div class="mb-5">
                                <label class=Theme::LABEL for="confirm-password">
                                    "Confirm Password"
                                </label>
                                <input
                                    id="confirm-password"
                                    type="password"
                                    class=Theme::INPUT
                                    autocomplete="new-password"
                                    placeholder="Confirm Password"
                                    required
                                    on:input=move |event| {
                                        set_confirm_password.set(event_target_value(&event))
                                    }
                                />
                            </div>
                            <Button button_type="submit" disabled=register_action.pending()>
                                {move || {
                                    if register_action.pending().get() {
                                        "Creating Account..."
                                    } else {
                                        "Create Account"
                                    }
                                }}
                            </Button>
                            {move || {
                                register_action
                                    .pending()
                                    .get()
                                    .then_some(
                                        view! {
                                            <div class="mt-4">
                                                <Spinner label="Creating account" />
                                            </div>
                                        },
                                    )
                            }}
                            {move || {
                                form_error
                                    .get()
                                    .map(|message| {
                                        view! { <p class="mt-3 text-sm text-red-600">{message}</p> }
                                    })
                            }}
                        </form>
                        <div class=Theme::DIVIDER>"Or"</div>
                        <div class="text-center">
                            <A href=paths::LOGIN {..} class=Theme::LINK>
                                "Back to Login"
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
