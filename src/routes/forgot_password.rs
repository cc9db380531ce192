//! Multi-step password recovery page. The step state machine lives in the
//! auth feature; this page wires forms, toasts, and the step indicator to
//! it. Recovery never verifies answers locally: every advance past a
//! server-owned step comes from a confirmed API success.

use crate::app_lib::theme::Theme;
use crate::components::{
    Button, ButtonVariant, SideDogAnimation, SidePosition, Spinner, ToastHub, use_toasts,
};
use crate::features::auth::recovery::{
    self, Notice, RecoveryFlow, RecoveryStep, STEP_TITLES,
};
use crate::features::auth::types::{SecurityAnswers, VerifyEmailRequest};
use crate::features::auth::{client, validate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use super::paths;

#[derive(Clone)]
struct VerifyInput {
    email: String,
    use_security_questions: bool,
}

fn announce(toasts: ToastHub, notice: Option<Notice>) {
    match notice {
        Some(Notice::Success(message)) => toasts.success(message),
        Some(Notice::Error(message)) => toasts.error(message),
        None => {}
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = use_toasts();
    let flow = RwSignal::new(RecoveryFlow::new());

    let (email, set_email) = signal(String::new());
    let (use_questions, set_use_questions) = signal(false);
    let (question1, set_question1) = signal(String::new());
    let (answer1, set_answer1) = signal(String::new());
    let (question2, set_question2) = signal(String::new());
    let (answer2, set_answer2) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move {
            let request = VerifyEmailRequest {
                email: input.email.clone(),
            };
            let result = client::verify_email(&request).await;
            (input, result)
        }
    });

    Effect::new(move |_| {
        if let Some((input, result)) = verify_action.value().get() {
            let notice = flow
                .try_update(|flow| {
                    flow.apply_verify_email(&input.email, input.use_security_questions, &result)
                })
                .flatten();
            announce(toasts, notice);
        }
    });

    let reset_action = Action::new_local(move |password: &String| {
        let password = password.clone();
        let request = flow.with_untracked(|flow| flow.recover_request(&password));
        async move {
            let result = client::recover_password(&request).await;
            (password, result)
        }
    });

    Effect::new(move |_| {
        if let Some((password, result)) = reset_action.value().get() {
            let notice = flow
                .try_update(|flow| flow.apply_recover_password(&password, &result))
                .flatten();
            announce(toasts, notice);
        }
    });

    let busy = Signal::derive(move || {
        verify_action.pending().get() || reset_action.pending().get()
    });

    let on_verify_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let email_value = validate::normalize_email(&email.get_untracked());
        if let Err(err) = validate::check_email(&email_value) {
            set_form_error.set(Some(err.user_message()));
            return;
        }

        verify_action.dispatch(VerifyInput {
            email: email_value,
            use_security_questions: use_questions.get_untracked(),
        });
    };

    let on_security_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let question_one = question1.get_untracked();
        let question_two = question2.get_untracked();
        if question_one.is_empty() || question_two.is_empty() {
            set_form_error.set(Some("Please select a security question".to_string()));
            return;
        }

        let answer_one = answer1.get_untracked().trim().to_string();
        let answer_two = answer2.get_untracked().trim().to_string();
        if answer_one.is_empty() || answer_two.is_empty() {
            set_form_error.set(Some("Please provide your answer".to_string()));
            return;
        }

        flow.update(|flow| {
            flow.submit_security_answers(SecurityAnswers {
                question1: question_one,
                answer1: answer_one,
                question2: question_two,
                answer2: answer_two,
            })
        });
    };

    let on_reset_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let password_value = new_password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        if let Err(err) = validate::check_new_password(&password_value, &confirm_value) {
            set_form_error.set(Some(err.user_message()));
            return;
        }

        reset_action.dispatch(password_value);
    };

    let on_acknowledge = move |_| {
        let notice = flow.try_update(|flow| flow.acknowledge_saved()).flatten();
        announce(toasts, notice);
    };

    let on_back = move |_| {
        set_form_error.set(None);
        flow.update(|flow| flow.back());
    };

    let step = Signal::derive(move || flow.with(|flow| flow.step()));
    let indicator = Signal::derive(move || flow.with(|flow| flow.indicator_index()));
    let verified_email = Signal::derive(move || flow.with(|flow| flow.email().to_string()));
    let recovered_password = Signal::derive(move || {
        flow.with(|flow| flow.recovered_password().unwrap_or_default().to_string())
    });

    let error_line = move || {
        form_error
            .get()
            .map(|message| view! { <p class="mt-3 text-sm text-red-600">{message}</p> })
    };

    view! {
        <div class="relative min-h-[calc(100vh-4rem)] bg-white px-6 py-10">
            <div class="absolute left-4 top-4">
                <A href=paths::LOGIN {..} class=Theme::BACK_LINK>
                    "← Back to Login"
                </A>
            </div>
            <div class="mx-auto flex max-w-5xl flex-col items-start gap-10 pt-12 md:flex-row">
                <div class="hidden flex-1 flex-col items-center self-center md:flex">
                    <SideDogAnimation position=SidePosition::Left glyph="🐢" />
                    <div class="mt-4 text-center">
                        <h2 class="text-xl font-semibold text-[#222222]">"Password Recovery"</h2>
                        <p class="mt-1 text-[#555555]">
                            "We'll help you reset your password safely"
                        </p>
                    </div>
                </div>
                <div class="w-full max-w-xl flex-1">
                    <div class=Theme::AUTH_CARD>
                        <div class="mb-6 text-center">
                            <h1 class=Theme::PAGE_TITLE>"Reset Password"</h1>
                            <p class=Theme::PAGE_SUBTITLE>
                                "Follow the steps to recover your account"
                            </p>
                        </div>
                        <StepIndicator current=indicator />
                        {move || match step.get() {
                            RecoveryStep::Email => {
                                view! {
                                    <div>
                                        <h2 class="text-lg font-semibold text-[#222222]">
                                            "Forgot Password"
                                        </h2>
                                        <p class="mb-5 mt-1 text-sm text-[#555555]">
                                            "Enter your email address to reset your password"
                                        </p>
                                        <form on:submit=on_verify_submit>
                                            <div class="mb-4">
                                                <label class=Theme::LABEL for="recovery-email">
                                                    "Email"
                                                </label>
                                                <input
                                                    id="recovery-email"
                                                    type="email"
                                                    class=Theme::INPUT
                                                    autocomplete="email"
                                                    placeholder="Enter your email address"
                                                    required
                                                    prop:value=email
                                                    on:input=move |event| {
                                                        set_email.set(event_target_value(&event))
                                                    }
                                                />
                                                <p class=Theme::HELP_TEXT>
                                                    "We'll verify this email in our system"
                                                </p>
                                            </div>
                                            <label class="mb-5 flex items-center gap-2 text-sm text-[#222222]">
                                                <input
                                                    type="checkbox"
                                                    class="h-4 w-4 rounded border-gray-300 accent-[#FF7F50]"
                                                    prop:checked=use_questions
                                                    on:change=move |event| {
                                                        set_use_questions.set(event_target_checked(&event))
                                                    }
                                                />
                                                "Use security questions for additional verification"
                                            </label>
                                            <Button button_type="submit" disabled=busy>
                                                {move || {
                                                    if verify_action.pending().get() {
                                                        "Verifying Email..."
                                                    } else {
                                                        "Verify Email"
                                                    }
                                                }}
                                            </Button>
                                            {move || {
                                                verify_action
                                                    .pending()
                                                    .get()
                                                    .then_some(
                                                        view! {
                                                            <div class="mt-4">
                                                                <Spinner label="Verifying email" />
                                                            </div>
                                                        },
                                                    )
                                            }}
                                            {error_line}
                                        </form>
                                        <div class=Theme::DIVIDER>"or"</div>
                                        <div class="text-center">
                                            <A href=paths::LOGIN {..} class=Theme::LINK>
                                                "Back to Login"
                                            </A>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            RecoveryStep::Security => {
                                view! {
                                    <div>
                                        <h2 class="text-lg font-semibold text-[#222222]">
                                            "Security Verification"
                                        </h2>
                                        <p class="mb-5 mt-1 text-sm text-[#555555]">
                                            "Please answer these security questions to verify your identity"
                                        </p>
                                        <form on:submit=on_security_submit>
                                            <div class="mb-4">
                                                <label class=Theme::LABEL for="question-1">
                                                    "Question 1"
                                                </label>
                                                <select
                                                    id="question-1"
                                                    class=Theme::INPUT
                                                    prop:value=question1
                                                    on:change=move |event| {
                                                        set_question1.set(event_target_value(&event))
                                                    }
                                                >
                                                    <option value="">"Select a security question"</option>
                                                    {recovery::first_question_group()
                                                        .iter()
                                                        .map(|(id, question)| {
                                                            view! { <option value=*id>{*question}</option> }
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </div>
                                            <div class="mb-4">
                                                <input
                                                    type="text"
                                                    class=Theme::INPUT
                                                    placeholder="Your answer"
                                                    prop:value=answer1
                                                    on:input=move |event| {
                                                        set_answer1.set(event_target_value(&event))
                                                    }
                                                />
                                            </div>
                                            <div class="mb-4">
                                                <label class=Theme::LABEL for="question-2">
                                                    "Question 2"
                                                </label>
                                                <select
                                                    id="question-2"
                                                    class=Theme::INPUT
                                                    prop:value=question2
                                                    on:change=move |event| {
                                                        set_question2.set(event_target_value(&event))
                                                    }
                                                >
                                                    <option value="">"Select a security question"</option>
                                                    {recovery::second_question_group()
                                                        .iter()
                                                        .map(|(id, question)| {
                                                            view! { <option value=*id>{*question}</option> }
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </div>
                                            <div class="mb-5">
                                                <input
                                                    type="text"
                                                    class=Theme::INPUT
                                                    placeholder="Your answer"
                                                    prop:value=answer2
                                                    on:input=move |event| {
                                                        set_answer2.set(event_target_value(&event))
                                                    }
                                                />
                                            </div>
                                            <Button button_type="submit" disabled=busy>
                                                "Continue"
                                            </Button>
                                            {error_line}
                                        </form>
                                        <div class="mt-5 text-center">
                                            <button type="button" class=Theme::BACK_LINK on:click=on_back>
                                                "← Back to Email Verification"
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            RecoveryStep::NewPassword => {
                                view! {
                                    <div>
                                        <h2 class="text-lg font-semibold text-[#222222]">
                                            "Choose New Password"
                                        </h2>
                                        <p class="mb-5 mt-1 text-sm text-[#555555]">
                                            {move || {
                                                format!(
                                                    "Create a new password for your account: {}",
                                                    verified_email.get(),
                                                )
                                            }}
                                        </p>
                                        <form on:submit=on_reset_submit>
                                            <div class="mb-4">
                                                <label class=Theme::LABEL for="new-password">
                                                    "New Password"
                                                </label>
                                                <input
                                                    id="new-password"
                                                    type="password"
                                                    class=Theme::INPUT
                                                    autocomplete="new-password"
                                                    placeholder="Enter your new password"
                                                    required
                                                    prop:value=new_password
                                                    on:input=move |event| {
                                                        set_new_password.set(event_target_value(&event))
                                                    }
                                                />
                                                <p class=Theme::HELP_TEXT>
                                                    "Choose a strong password with at least 6 characters"
                                                </p>
                                            </div>
                                            <div class="mb-5">
                                                <label class=Theme::LABEL for="confirm-new-password">
                                                    "Confirm Password"
                                                </label>
                                                <input
                                                    id="confirm-new-password"
                                                    type="password"
                                                    class=Theme::INPUT
                                                    autocomplete="new-password"
                                                    placeholder="Confirm Password"
                                                    required
                                                    prop:value=confirm_password
                                                    on:input=move |event| {
                                                        set_confirm_password.set(event_target_value(&event))
                                                    }
                                                />
                                            </div>
                                            <Button button_type="submit" disabled=busy>
                                                {move || {
                                                    if reset_action.pending().get() {
                                                        "Resetting Password..."
                                                    } else {
                                                        "Reset Password"
                                                    }
                                                }}
                                            </Button>
                                            {move || {
                                                reset_action
                                                    .pending()
                                                    .get()
                                                    .then_some(
                                                        view! {
                                                            <div class="mt-4">
                                                                <Spinner label="Resetting password" />
                                                            </div>
                                                        },
                                                    )
                                            }}
                                            {error_line}
                                        </form>
                                        <div class="mt-5 text-center">
                                            <button type="button" class=Theme::BACK_LINK on:click=on_back>
                                                "← Back"
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            RecoveryStep::Password => {
                                view! {
                                    <div>
                                        <h2 class="text-lg font-semibold text-[#222222]">
                                            "Password Reset Complete"
                                        </h2>
                                        <p class="mb-5 mt-1 text-sm text-[#555555]">
                                            {move || {
                                                format!(
                                                    "Your password has been successfully reset for {}",
                                                    verified_email.get(),
                                                )
                                            }}
                                        </p>
                                        <div class="mb-5 rounded-lg border border-emerald-200 bg-emerald-50 p-4">
                                            <p class="text-sm font-semibold text-emerald-800">
                                                "New Password"
                                            </p>
                                            <p class="mb-3 text-xs text-emerald-700">
                                                "This is your new password. You can use it to log in immediately."
                                            </p>
                                            <div class="flex items-center gap-2">
                                                <input
                                                    type=move || {
                                                        if show_password.get() { "text" } else { "password" }
                                                    }
                                                    class=Theme::INPUT
                                                    readonly
                                                    prop:value=recovered_password
                                                />
                                                <Button
                                                    variant=ButtonVariant::Outline
                                                    on:click=move |_| {
                                                        set_show_password.update(|shown| *shown = !*shown)
                                                    }
                                                >
                                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                                </Button>
                                            </div>
                                        </div>
                                        <p class="mb-5 text-xs text-[#888888]">
                                            "This is your new password. Please save it in a secure location."
                                        </p>
                                        <div class="flex flex-col gap-3 sm:flex-row sm:items-center">
                                            <Button on:click=on_acknowledge>
                                                "I've Saved My Password"
                                            </Button>
                                            <A href=paths::LOGIN {..} class=Theme::LINK>
                                                "Go to Login Page"
                                            </A>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            RecoveryStep::Success => {
                                view! {
                                    <div class="text-center">
                                        <div class="mb-4 text-5xl">"✅"</div>
                                        <h2 class="text-lg font-semibold text-[#222222]">
                                            "Password Reset Successfully"
                                        </h2>
                                        <p class="mt-2 text-sm text-[#555555]">
                                            "You can now use your new password to log in to your account."
                                        </p>
                                        <p class="mb-6 mt-1 text-xs text-[#888888]">
                                            "For security reasons, please change your password after logging in."
                                        </p>
                                        <A
                                            href=paths::LOGIN
                                            {..}
                                            class="inline-block rounded-lg bg-[#FF7F50] px-5 py-2.5 text-sm font-medium text-white hover:bg-[#E86A3E]"
                                        >
                                            "Go to Login"
                                        </A>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Four-station progress indicator above the step content.
#[component]
fn StepIndicator(#[prop(into)] current: Signal<usize>) -> impl IntoView {
    view! {
        <ol class="mb-8 flex items-center justify-center gap-3">
            {STEP_TITLES
                .iter()
                .enumerate()
                .map(|(index, title)| {
                    view! {
                        <li class="flex items-center gap-2">
                            <span class=move || {
                                if index <= current.get() {
                                    "flex h-7 w-7 items-center justify-center rounded-full bg-[#FF7F50] text-xs font-semibold text-white"
                                } else {
                                    "flex h-7 w-7 items-center justify-center rounded-full bg-gray-200 text-xs font-semibold text-gray-500"
                                }
                            }>{index + 1}</span>
                            <span class="hidden text-xs text-[#555555] sm:inline">{*title}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
