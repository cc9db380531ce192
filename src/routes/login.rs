use crate::app_lib::theme::Theme;
use crate::components::{Button, SideDogAnimation, SidePosition, Spinner, use_toasts};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::features::auth::validate;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::paths;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (login_error, set_login_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let request = LoginRequest {
            email: input.email.clone(),
            password: input.password.clone(),
        };
        async move { auth.login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => navigate(paths::DASHBOARD, Default::default()),
                Err(err) => {
                    toasts.error(err.user_message());
                    set_login_error.set(Some(
                        "Invalid email or password. Please try again.".to_string(),
                    ));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);
        set_login_error.set(None);

        let email_value = validate::normalize_email(&email.get_untracked());
        let password_value = password.get_untracked();

        if let Err(err) = validate::check_email(&email_value) {
            set_form_error.set(Some(err.user_message()));
            return;
        }
        if password_value.is_empty() {
            set_form_error.set(Some("Please enter your password".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
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
                    <SideDogAnimation position=SidePosition::Right />
                    <div class="mt-4 text-center">
                        <h2 class="text-xl font-semibold text-[#222222]">"Welcome Back"</h2>
                        <p class="mt-1 text-[#555555]">
                            "Sign in to continue your pet care journey"
                        </p>
                    </div>
                </div>
                <div class="w-full max-w-md flex-1">
                    <div class=Theme::AUTH_CARD>
                        <div class="mb-6 text-center">
                            <h1 class=Theme::PAGE_TITLE>"Sign In"</h1>
                            <p class=Theme::PAGE_SUBTITLE>
                                "Access your account to manage pet care services"
                            </p>
                        </div>
                        <form on:submit=on_submit>
                            <div class="mb-5">
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
                            <div class="mb-5">
                                <label class=Theme::LABEL for="password">
                                    "Password"
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class=Theme::INPUT
                                    autocomplete="current-password"
                                    placeholder="Password"
                                    required
                                    on:input=move |event| {
                                        set_password.set(event_target_value(&event))
                                    }
                                />
                                {move || {
                                    login_error
                                        .get()
                                        .map(|message| {
                                            view! { <p class="mt-2 text-sm text-red-600">{message}</p> }
                                        })
                                }}
                            </div>
                            <Button button_type="submit" disabled=login_action.pending()>
                                {move || {
                                    if login_action.pending().get() {
                                        "Signing In..."
                                    } else {
                                        "Sign In"
                                    }
                                }}
                            </Button>
                            {move || {
                                login_action
                                    .pending()
                                    .get()
                                    .then_some(
                                        view! { <div class="mt-4"><Spinner label="Signing in" /></div> },
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
                        <p class="mt-5 text-sm text-[#555555]">
                            "Forgot password? "
                            <A href=paths::FORGOT_PASSWORD {..} class=Theme::LINK>
                                "Reset it here"
                            </A>
                        </p>
                        <div class=Theme::DIVIDER>"Or"</div>
                        <div class="text-center">
                            <A href=paths::REGISTER {..} class=Theme::LINK>
                                "Create New Account"
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
