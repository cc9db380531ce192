//! In-app toast notifications. Success and error toasts expire on their
//! own timers; messages must be safe to render and never include secrets.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a success toast stays visible (milliseconds).
const SUCCESS_TOAST_MS: u32 = 3_000;
/// How long an error toast stays visible (milliseconds).
const ERROR_TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Copy)]
/// Handle for pushing toasts from anywhere below the provider.
pub struct ToastHub {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastHub {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows a short-lived success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Shows an error toast; errors linger a little longer.
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts
            .update(|toasts| toasts.push(Toast { id, kind, message }));

        let lifetime = match kind {
            ToastKind::Success => SUCCESS_TOAST_MS,
            ToastKind::Error => ERROR_TOAST_MS,
        };
        let toasts = self.toasts;
        Timeout::new(lifetime, move || {
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        })
        .forget();
    }
}

/// Provides the toast hub to the subtree.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastHub::new());
    view! { {children()} }
}

/// Returns the toast hub or a detached fallback hub.
pub fn use_toasts() -> ToastHub {
    use_context::<ToastHub>().unwrap_or_else(ToastHub::new)
}

/// Renders active toasts stacked in the top-right corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let hub = use_toasts();

    view! {
        <div class="fixed right-4 top-4 z-[60] flex flex-col items-end gap-2">
            <For each=move || hub.toasts.get() key=|toast| toast.id let:toast>
                <div
                    class=match toast.kind {
                        ToastKind::Success => {
                            "rounded-lg bg-[#52c41a] px-4 py-3 text-sm font-medium text-white shadow-lg"
                        }
                        ToastKind::Error => {
                            "rounded-lg bg-[#ff4d4f] px-4 py-3 text-sm font-medium text-white shadow-lg"
                        }
                    }
                    role="status"
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
