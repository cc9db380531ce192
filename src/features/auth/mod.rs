//! Auth feature module covering account creation, login, session
//! persistence, and password recovery. It keeps authentication logic out
//! of the UI and must stay aligned with backend contract expectations.
//! This module touches security boundaries and must avoid logging secrets
//! or token material.
//!
//! Flow Overview: Login and signup exchange credentials for a token and
//! user pair, which is persisted as an all-or-nothing pair and verified
//! against the API on startup. Password recovery walks a verify-email,
//! optional security-questions, new-password, confirmation sequence and
//! only ever advances on a confirmed server success.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub mod recovery;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub mod storage;
pub mod types;
pub mod validate;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RedirectIfAuthed, RequireAuth};
