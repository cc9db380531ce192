//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the application. The palette follows the PetFinder brand: coral
//! for primary actions, sky blue for accents.

pub struct Theme;

impl Theme {
    /// Card wrapping the auth forms, with the brand's coral/blue edges.
    pub const AUTH_CARD: &'static str = "w-full rounded-xl border-t-4 border-b-4 border-t-[#FF7F50] border-b-[#3498DB] bg-white p-8 shadow-lg";

    /// Dashboard card with the same coral/blue edges and no padding, so
    /// the header row can span the full width.
    pub const CARD: &'static str = "overflow-hidden rounded-xl border-t-4 border-b-4 border-t-[#FF7F50] border-b-[#3498DB] bg-white shadow-md";

    /// Header row at the top of a dashboard card.
    pub const CARD_HEADER: &'static str = "border-b border-gray-100 px-6 py-4 text-lg font-semibold text-[#FF7F50]";

    /// Heading shown at the top of a card or page section.
    pub const PAGE_TITLE: &'static str = "text-2xl font-bold text-[#222222]";

    /// Muted line under a page title.
    pub const PAGE_SUBTITLE: &'static str = "mt-1 text-sm text-[#555555]";

    /// Label above a form input.
    pub const LABEL: &'static str = "mb-1 block text-sm font-medium text-[#222222]";

    /// Text, email, password, and select inputs.
    pub const INPUT: &'static str = "w-full rounded-lg border border-gray-300 px-3 py-2 text-[#222222] placeholder-gray-400 focus:border-[#FF7F50] focus:outline-none focus:ring-1 focus:ring-[#FF7F50]";

    /// Inline hint under an input.
    pub const HELP_TEXT: &'static str = "mt-1 text-xs text-[#888888]";

    /// Inline text link in the brand accent color.
    pub const LINK: &'static str = "font-medium text-[#3498DB] hover:text-[#2874A6] hover:underline";

    /// Muted navigation link used for back actions.
    pub const BACK_LINK: &'static str = "text-sm font-medium text-[#555555] hover:text-[#FF7F50]";

    /// Horizontal divider with centered text, used between form actions.
    pub const DIVIDER: &'static str = "my-5 flex items-center gap-3 text-xs uppercase text-gray-400 before:h-px before:flex-1 before:bg-gray-200 after:h-px after:flex-1 after:bg-gray-200";
}
