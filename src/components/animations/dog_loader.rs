//! Decorative dog loader shown while routes or sessions settle.

use leptos::prelude::*;

/// Render sizes for the dog loader.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LoaderSize {
    Small,
    Medium,
    Large,
}

/// Spinning-ring loader with a bouncing dog and an optional caption.
#[component]
pub fn DogLoader(
    #[prop(optional, default = LoaderSize::Medium)] size: LoaderSize,
    #[prop(optional, default = true)] show_caption: bool,
) -> impl IntoView {
    let (frame_class, glyph_class, caption_class) = match size {
        LoaderSize::Small => ("relative h-20 w-20", "text-3xl", "mt-3 text-sm"),
        LoaderSize::Medium => ("relative h-36 w-36", "text-5xl", "mt-4 text-lg"),
        LoaderSize::Large => ("relative h-52 w-52", "text-7xl", "mt-5 text-2xl"),
    };

    view! {
        <div class="flex flex-col items-center justify-center p-5">
            <div class=frame_class aria-hidden="true">
                <div class="absolute inset-0 animate-spin rounded-full border-4 border-orange-200 border-t-[#FF7F50]"></div>
                <div class=format!("absolute inset-0 flex animate-bounce items-center justify-center {glyph_class}")>
                    "🐶"
                </div>
            </div>
            {show_caption.then_some(view! {
                <div class=format!("{caption_class} text-center font-medium text-[#222222]")>
                    "Reuniting pets with their families"
                </div>
            })}
        </div>
    }
}

/// Centered loader used while route guards wait on session restoration.
#[component]
pub fn RouteLoader() -> impl IntoView {
    view! {
        <div class="flex h-[60vh] items-center justify-center">
            <DogLoader size=LoaderSize::Medium />
        </div>
    }
}
