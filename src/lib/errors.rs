//! Error taxonomy shared by the network layer and the UI.
//!
//! Variants mirror how requests actually fail in the browser: transport
//! problems (timeout, network, TLS), rejected credentials, client-side
//! validation, and server responses carrying a message. Classification
//! from raw observations lives here so it can be tested on the host.

use serde::Deserialize;
use std::fmt;

/// Longest server-provided message surfaced to users.
const MAX_ERROR_CHARS: usize = 200;

/// Application error for API calls and form handling.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Client-side configuration or setup problem.
    Config(String),
    /// The server could not be reached.
    Network(String),
    /// The request was aborted after the timeout elapsed.
    Timeout(String),
    /// The TLS handshake or certificate check failed.
    Ssl(String),
    /// The API rejected the bearer token on an authenticated call.
    AuthRejected(String),
    /// A form value failed a client-side check before any request.
    Validation(String),
    /// The server answered with a non-success status.
    Server { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The request body could not be encoded.
    Serialization(String),
}

impl AppError {
    /// Stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG",
            AppError::Network(_) => "NETWORK",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Ssl(_) => "SSL_ERROR",
            AppError::AuthRejected(_) => "AUTH_REJECTED",
            AppError::Validation(_) => "VALIDATION",
            AppError::Server { .. } => "SERVER_MESSAGE",
            AppError::Parse(_) => "PARSE",
            AppError::Serialization(_) => "SERIALIZATION",
        }
    }

    /// Message suitable for toasts and form alerts, preferring text the
    /// server sent.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Server { status, message } => {
                if message.is_empty() {
                    format!("Request failed ({status}).")
                } else {
                    message.clone()
                }
            }
            AppError::Config(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Ssl(message)
            | AppError::AuthRejected(message)
            | AppError::Validation(message)
            | AppError::Parse(message)
            | AppError::Serialization(message) => message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Ssl(message) => write!(formatter, "TLS error: {message}"),
            AppError::AuthRejected(message) => write!(formatter, "Authentication rejected: {message}"),
            AppError::Validation(message) => write!(formatter, "Validation error: {message}"),
            AppError::Server { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Parse error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Serialization error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Classifies a request that never produced a response, by its error text.
pub fn classify_fetch_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if lowered.contains("ssl") || lowered.contains("certificate") || lowered.contains("cert")
    {
        AppError::Ssl("Secure connection failed. SSL certificate issue.".to_string())
    } else {
        AppError::Network("Network error - Unable to connect to server".to_string())
    }
}

/// Classifies a non-success HTTP response.
///
/// A 401 counts as a rejected session only when the request carried a
/// bearer token; a failed login attempt is an ordinary server response.
/// The caller owns the side effects of a rejected session.
pub fn classify_http_failure(status: u16, body: &str, sent_bearer: bool) -> AppError {
    if sent_bearer && status == 401 {
        return AppError::AuthRejected("Your session has expired. Please sign in again.".to_string());
    }

    AppError::Server {
        status,
        message: extract_server_message(body),
    }
}

#[derive(Deserialize)]
struct ServerEnvelope {
    #[serde(default)]
    message: String,
}

/// Pulls the `message` field out of an API error body. Returns an empty
/// string when the body is not JSON or carries no usable message, so
/// callers can apply their own fallback wording.
fn extract_server_message(body: &str) -> String {
    serde_json::from_str::<ServerEnvelope>(body)
        .ok()
        .map(|envelope| envelope.message.trim().to_string())
        .filter(|message| !message.is_empty())
        .map(|message| message.chars().take(MAX_ERROR_CHARS).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::Timeout(String::new()).code(), "TIMEOUT");
        assert_eq!(AppError::Network(String::new()).code(), "NETWORK");
        assert_eq!(AppError::Ssl(String::new()).code(), "SSL_ERROR");
        assert_eq!(AppError::AuthRejected(String::new()).code(), "AUTH_REJECTED");
        assert_eq!(AppError::Validation(String::new()).code(), "VALIDATION");
        assert_eq!(
            AppError::Server {
                status: 500,
                message: String::new()
            }
            .code(),
            "SERVER_MESSAGE"
        );
    }

    #[test]
    fn fetch_errors_classify_by_text() {
        assert_eq!(
            classify_fetch_error("The operation was aborted"),
            AppError::Timeout("Request timed out. Please try again.".to_string())
        );
        assert_eq!(
            classify_fetch_error("request timeout reached"),
            AppError::Timeout("Request timed out. Please try again.".to_string())
        );
        assert_eq!(
            classify_fetch_error("SSL certificate problem"),
            AppError::Ssl("Secure connection failed. SSL certificate issue.".to_string())
        );
        assert_eq!(
            classify_fetch_error("Failed to fetch"),
            AppError::Network("Network error - Unable to connect to server".to_string())
        );
    }

    #[test]
    fn unauthorized_with_bearer_rejects_session() {
        let err = classify_http_failure(401, r#"{"message":"Token expired"}"#, true);
        assert!(matches!(err, AppError::AuthRejected(_)));
        assert_eq!(err.code(), "AUTH_REJECTED");
    }

    #[test]
    fn unauthorized_without_bearer_is_server_response() {
        let err = classify_http_failure(401, r#"{"message":"Invalid credentials"}"#, false);
        assert_eq!(
            err,
            AppError::Server {
                status: 401,
                message: "Invalid credentials".to_string()
            }
        );
    }

    #[test]
    fn server_message_extracted_from_json_body() {
        let err = classify_http_failure(404, r#"{"message":"Email not found"}"#, false);
        assert_eq!(
            err,
            AppError::Server {
                status: 404,
                message: "Email not found".to_string()
            }
        );
    }

    #[test]
    fn non_json_body_yields_empty_message() {
        let err = classify_http_failure(502, "<html>Bad Gateway</html>", false);
        assert_eq!(
            err,
            AppError::Server {
                status: 502,
                message: String::new()
            }
        );
    }

    #[test]
    fn long_server_messages_are_truncated() {
        let body = format!(r#"{{"message":"{}"}}"#, "x".repeat(500));
        let err = classify_http_failure(500, &body, false);
        match err {
            AppError::Server { message, .. } => assert_eq!(message.len(), MAX_ERROR_CHARS),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = AppError::Server {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.user_message(), "Email already registered");

        let bare = AppError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(bare.user_message(), "Request failed (500).");
    }
}
