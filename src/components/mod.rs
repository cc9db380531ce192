//! Shared UI components exported for routes and features.

pub(crate) mod animations;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use animations::{
    DogLoader, FindPetAnimation, LoaderSize, PageTransition, RouteLoader, SideDogAnimation,
    SidePosition,
};
pub(crate) use layout::Navbar;
pub(crate) use ui::{
    Alert, AlertKind, Button, ButtonVariant, Spinner, ToastHub, ToastProvider, Toaster, use_toasts,
};
