//! HTTP helpers for the PetFinder JSON API with consistent timeouts and
//! error handling. Feature clients use these helpers to avoid duplicating
//! request setup and to enforce a predictable timeout policy. Requests
//! marked authenticated attach the stored bearer token; a 401 on such a
//! request expires the session and sends the user back to the login page.

use super::{
    config::AppConfig,
    errors::{AppError, classify_fetch_error, classify_http_failure},
};
use crate::features::auth::session::browser_store;
use crate::routes::paths;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 15_000;

/// Posts JSON without credentials and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response, false).await
}

/// Fetches JSON with the stored bearer token attached.
pub async fn get_json_with_auth<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let bearer = bearer_header();
    let sent_bearer = bearer.is_some();
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::get(&url).abort_signal(Some(signal));

        if let Some(value) = &bearer {
            builder = builder.header("Authorization", value);
        }

        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response, sent_bearer).await
}

/// Puts JSON with the stored bearer token and parses a JSON response.
pub async fn put_json_with_auth<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let bearer = bearer_header();
    let sent_bearer = bearer.is_some();
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::put(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        if let Some(value) = &bearer {
            builder = builder.header("Authorization", value);
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response, sent_bearer).await
}

/// Puts JSON with the stored bearer token, ignoring the response body.
pub async fn put_json_with_auth_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let bearer = bearer_header();
    let sent_bearer = bearer.is_some();
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::put(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        if let Some(value) = &bearer {
            builder = builder.header("Authorization", value);
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response, sent_bearer).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// `Authorization` header value for the stored token, if any.
fn bearer_header() -> Option<String> {
    browser_store().token().map(|token| format!("Bearer {token}"))
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request
        .send()
        .await
        .map_err(|err| classify_fetch_error(&err.to_string()))
}

/// Parses JSON responses and surfaces HTTP failures as classified errors.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
    sent_bearer: bool,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(fail_response(response, sent_bearer).await)
    }
}

/// Handles responses whose bodies callers do not need.
async fn handle_empty_response(
    response: gloo_net::http::Response,
    sent_bearer: bool,
) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(fail_response(response, sent_bearer).await)
    }
}

/// Classifies a failed response and applies session-expiry side effects.
async fn fail_response(response: gloo_net::http::Response, sent_bearer: bool) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = classify_http_failure(status, &body, sent_bearer);

    if matches!(err, AppError::AuthRejected(_)) {
        expire_session();
    }

    err
}

/// Clears the stored session pair and returns to the login page. No-op when
/// already there, so a rejected login attempt cannot cause a reload loop.
fn expire_session() {
    browser_store().clear();

    if let Some(window) = web_sys::window() {
        let location = window.location();
        let at_login = location
            .pathname()
            .map(|pathname| pathname == paths::LOGIN)
            .unwrap_or(false);

        if !at_login {
            let _ = location.set_href(paths::LOGIN);
        }
    }
}
