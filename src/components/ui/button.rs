use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum ButtonVariant {
    /// Coral call-to-action, used for form submits.
    #[default]
    Solid,
    /// Quiet bordered button for secondary actions.
    Outline,
}

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = match variant {
        ButtonVariant::Solid => {
            "w-full rounded-lg bg-[#FF7F50] px-5 py-2.5 text-center text-sm font-medium text-white hover:bg-[#E86A3E] focus:outline-none focus:ring-4 focus:ring-orange-200 sm:w-auto"
        }
        ButtonVariant::Outline => {
            "rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-[#555555] hover:bg-gray-50 focus:outline-none focus:ring-4 focus:ring-orange-100"
        }
    };

    view! {
        <button
            type=button_type
            class=class
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
