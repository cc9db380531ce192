//! Shared frontend utilities for API access, configuration, error
//! classification, and build metadata.
//!
//! Centralizing these helpers keeps network behavior consistent across
//! features and avoids duplicated logic in routes. The helpers do not
//! decide what is stored or sent for authentication; the auth feature
//! owns that policy.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod build_info;
pub mod config;
pub mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

pub use errors::AppError;
