//! Decorative side illustration for the auth pages.

use leptos::prelude::*;

/// Which way the illustration leans.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SidePosition {
    Left,
    Right,
}

/// Large animal glyph with a gentle pulse, shown beside auth forms.
#[component]
pub fn SideDogAnimation(
    #[prop(optional, default = SidePosition::Right)] position: SidePosition,
    #[prop(optional, default = "🐕")] glyph: &'static str,
) -> impl IntoView {
    let lean = match position {
        SidePosition::Left => "-rotate-6",
        SidePosition::Right => "rotate-6",
    };

    view! {
        <div class="flex items-center justify-center" aria-hidden="true">
            <div class=format!("animate-pulse text-[9rem] leading-none {lean}")>{glyph}</div>
        </div>
    }
}
