//! PetFinder web frontend.
//!
//! Client-side rendered Leptos application for the PetFinder community
//! platform: public marketing pages, email and password authentication,
//! a multi-step password recovery flow, and a small member dashboard.
//!
//! Session and recovery state machines, validation, and error
//! classification are plain Rust modules that compile and test on the
//! host. Everything that touches the DOM or the network is gated to the
//! `wasm32` target.

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

/// Mounts the application onto `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    mount_to_body(App);
}
