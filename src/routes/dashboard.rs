//! Member dashboard. The overview tab hosts the pet care services card;
//! the profile tab lists personal information and carries the
//! edit-profile and change-password forms.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, FindPetAnimation, Spinner, use_toasts};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{ChangePasswordRequest, UpdateProfileRequest};
use crate::features::auth::validate;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Tabs of the dashboard shell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Profile,
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "border-b-2 border-[#FF7F50] px-4 py-2 text-sm font-semibold text-[#FF7F50]"
    } else {
        "border-b-2 border-transparent px-4 py-2 text-sm font-medium text-[#555555] hover:text-[#FF7F50]"
    }
}

#[component]
pub fn DashboardPage(
    #[prop(optional, default = DashboardTab::Overview)] initial_tab: DashboardTab,
) -> impl IntoView {
    let auth = use_auth();
    let (active_tab, set_active_tab) = signal(initial_tab);
    let user_name = move || {
        auth.user()
            .map(|user| user.name)
            .unwrap_or_else(|| "User".to_string())
    };

    view! {
        <div class="mx-auto max-w-6xl px-4 py-8">
            <header class="mb-6 border-b border-gray-100 pb-4">
                <h1 class="text-3xl font-bold text-[#222222]">"My Dashboard"</h1>
                <p class="mt-1 text-[#555555]">
                    {move || format!("Welcome back, {}", user_name())}
                </p>
            </header>
            <div class="mb-6 flex gap-2 border-b border-gray-200" role="tablist">
                <button
                    type="button"
                    role="tab"
                    aria-selected=move || (active_tab.get() == DashboardTab::Overview).to_string()
                    class=move || tab_class(active_tab.get() == DashboardTab::Overview)
                    on:click=move |_| set_active_tab.set(DashboardTab::Overview)
                >
                    "🐾 Dashboard"
                </button>
                <button
                    type="button"
                    role="tab"
                    aria-selected=move || (active_tab.get() == DashboardTab::Profile).to_string()
                    class=move || tab_class(active_tab.get() == DashboardTab::Profile)
                    on:click=move |_| set_active_tab.set(DashboardTab::Profile)
                >
                    "👤 Profile"
                </button>
            </div>
            {move || match active_tab.get() {
                DashboardTab::Overview => view! { <OverviewTab /> }.into_any(),
                DashboardTab::Profile => view! { <ProfileTab /> }.into_any(),
            }}
        </div>
    }
}

/// Pet care services card with the inquiry call to action.
#[component]
fn OverviewTab() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class=Theme::CARD>
            <div class=Theme::CARD_HEADER>"Pet Care Services"</div>
            <div class="flex flex-col items-center px-6 py-10 text-center">
                <h2 class="text-2xl font-semibold text-[#222222]">
                    "Need assistance with your pet?"
                </h2>
                <p class="mt-3 max-w-xl text-[#555555]">
                    "Submit an inquiry to our team and we'll get back to you as soon as possible."
                </p>
                <div class="mt-8 flex flex-col items-center gap-8 md:flex-row">
                    <FindPetAnimation />
                    <Button on:click=move |_| {
                        toasts.success("Inquiry received! Our team will get back to you soon.")
                    }>"Submit an Inquiry"</Button>
                </div>
            </div>
        </div>
    }
}

#[derive(Clone)]
struct ProfileInput {
    name: String,
    email: String,
}

#[derive(Clone)]
struct PasswordInput {
    current_password: String,
    new_password: String,
}

/// Personal information plus the edit-profile and change-password forms.
#[component]
fn ProfileTab() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let current = auth.user();
    let (name, set_name) = signal(
        current
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default(),
    );
    let (email, set_email) = signal(
        current
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_default(),
    );
    let (profile_error, set_profile_error) = signal::<Option<String>>(None);

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (password_feedback, set_password_feedback) =
        signal::<Option<(AlertKind, String)>>(None);

    let update_action = Action::new_local(move |input: &ProfileInput| {
        let request = UpdateProfileRequest {
            name: input.name.clone(),
            email: input.email.clone(),
        };
        async move { auth.update_profile(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => toasts.success("Profile updated successfully!"),
                Err(err) => toasts.error(err.user_message()),
            }
        }
    });

    let password_action = Action::new_local(move |input: &PasswordInput| {
        let request = ChangePasswordRequest {
            current_password: input.current_password.clone(),
            new_password: input.new_password.clone(),
        };
        async move { auth.change_password(&request).await }
    });

    // The password form confirms inline rather than by toast so the
    // confirmation outlives the toast lifetime.
    Effect::new(move |_| {
        if let Some(result) = password_action.value().get() {
            match result {
                Ok(_) => {
                    set_password_feedback.set(Some((
                        AlertKind::Success,
                        "Password changed successfully!".to_string(),
                    )));
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(err) => {
                    set_password_feedback
                        .set(Some((AlertKind::Error, err.user_message())));
                }
            }
        }
    });

    let on_profile_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_profile_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = validate::normalize_email(&email.get_untracked());

        if name_value.is_empty() {
            set_profile_error.set(Some("Please enter your name".to_string()));
            return;
        }
        if let Err(err) = validate::check_email(&email_value) {
            set_profile_error.set(Some(err.user_message()));
            return;
        }

        update_action.dispatch(ProfileInput {
            name: name_value,
            email: email_value,
        });
    };

    let on_password_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_password_feedback.set(None);

        let current_value = current_password.get_untracked();
        let new_value = new_password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if current_value.is_empty() {
            set_password_feedback.set(Some((
                AlertKind::Error,
                "Please enter your current password".to_string(),
            )));
            return;
        }
        if let Err(err) = validate::check_new_password(&new_value, &confirm_value) {
            set_password_feedback.set(Some((AlertKind::Error, err.user_message())));
            return;
        }

        password_action.dispatch(PasswordInput {
            current_password: current_value,
            new_password: new_value,
        });
    };

    view! {
        <div class="grid gap-6 lg:grid-cols-2">
            <div class=Theme::CARD>
                <div class=Theme::CARD_HEADER>"Personal Information"</div>
                <div class="px-6 py-5">
                    <dl class="mb-6 space-y-4">
                        <div class="flex flex-col sm:flex-row">
                            <dt class="w-36 font-medium text-[#FF7F50]">"Name:"</dt>
                            <dd class="text-[#222222]">
                                {move || {
                                    auth.user().map(|user| user.name).unwrap_or_default()
                                }}
                            </dd>
                        </div>
                        <div class="flex flex-col sm:flex-row">
                            <dt class="w-36 font-medium text-[#FF7F50]">"Email:"</dt>
                            <dd class="text-[#222222]">
                                {move || {
                                    auth.user().map(|user| user.email).unwrap_or_default()
                                }}
                            </dd>
                        </div>
                    </dl>
                    <form on:submit=on_profile_submit>
                        <div class="mb-4">
                            <label class=Theme::LABEL for="profile-name">
                                "Name"
                            </label>
                            <input
                                id="profile-name"
                                type="text"
                                class=Theme::INPUT
                                autocomplete="name"
                                required
                                prop:value=name
                                on:input=move |event| set_name.set(event_target_value(&event))
                            />
                        </div>
                        <div class="mb-5">
                            <label class=Theme::LABEL for="profile-email">
                                "Email"
                            </label>
                            <input
                                id="profile-email"
                                type="email"
                                class=Theme::INPUT
                                autocomplete="email"
                                required
                                prop:value=email
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>
                        <Button button_type="submit" disabled=update_action.pending()>
                            {move || {
                                if update_action.pending().get() {
                                    "Saving..."
                                } else {
                                    "Edit Profile"
                                }
                            }}
                        </Button>
                        {move || {
                            update_action
                                .pending()
                                .get()
                                .then_some(
                                    view! {
                                        <div class="mt-3">
                                            <Spinner label="Saving profile" />
                                        </div>
                                    },
                                )
                        }}
                        {move || {
                            profile_error
                                .get()
                                .map(|message| {
                                    view! {
                                        <div class="mt-3">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    }
                                })
                        }}
                    </form>
                </div>
            </div>
            <div class=Theme::CARD>
                <div class=Theme::CARD_HEADER>"Change Password"</div>
                <div class="px-6 py-5">
                    <p class="mb-5 text-sm text-[#555555]">
                        "Pick a new password for your account. You stay signed in after the change."
                    </p>
                    <form on:submit=on_password_submit>
                        <div class="mb-4">
                            <label class=Theme::LABEL for="current-password">
                                "Current Password"
                            </label>
                            <input
                                id="current-password"
                                type="password"
                                class=Theme::INPUT
                                autocomplete="current-password"
                                required
                                prop:value=current_password
                                on:input=move |event| {
                                    set_current_password.set(event_target_value(&event))
                                }
                            />
                        </div>
                        <div class="mb-4">
                            <label class=Theme::LABEL for="new-password">
                                "New Password"
                            </label>
                            <input
                                id="new-password"
                                type="password"
                                class=Theme::INPUT
                                autocomplete="new-password"
                                required
                                prop:value=new_password
                                on:input=move |event| {
                                    set_new_password.set(event_target_value(&event))
                                }
                            />
                            <p class=Theme::HELP_TEXT>
                                "Password must be at least 6 characters"
                            </p>
                        </div>
                        <div class="mb-5">
                            <label class=Theme::LABEL for="confirm-new-password">
                                "Confirm New Password"
                            </label>
                            <input
                                id="confirm-new-password"
                                type="password"
                                class=Theme::INPUT
                                autocomplete="new-password"
                                required
                                prop:value=confirm_password
                                on:input=move |event| {
                                    set_confirm_password.set(event_target_value(&event))
                                }
                            />
                        </div>
                        <Button button_type="submit" disabled=password_action.pending()>
                            {move || {
                                if password_action.pending().get() {
                                    "Updating..."
                                } else {
                                    "Update Password"
                                }
                            }}
                        </Button>
                        {move || {
                            password_action
                                .pending()
                                .get()
                                .then_some(
                                    view! {
                                        <div class="mt-3">
                                            <Spinner label="Updating password" />
                                        </div>
                                    },
                                )
                        }}
                        {move || {
                            password_feedback
                                .get()
                                .map(|(kind, message)| {
                                    view! {
                                        <div class="mt-3">
                                            <Alert kind=kind message=message />
                                        </div>
                                    }
                                })
                        }}
                    </form>
                </div>
            </div>
        </div>
    }
}
