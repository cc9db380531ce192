//! Request and response types for the PetFinder auth API. These mirror the
//! backend contract; successful auth calls wrap their payload in a `data`
//! envelope, while verification and recovery endpoints answer with a
//! success flag and message.

use serde::{Deserialize, Serialize};

/// Account profile returned by the API and persisted with the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Accepts the backend's `_id` as well as a plain `id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Token and user pair issued on login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// Generic `data` envelope wrapping successful API payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiData<T> {
    pub data: T,
}

/// Outcome body returned by the verification and recovery endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
}

/// Chosen security questions and their answers, keyed by question id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecurityAnswers {
    pub question1: String,
    pub answer1: String,
    pub question2: String,
    pub answer2: String,
}

/// Body for the recover-password endpoint. The answers are attached only
/// when the user opted into security questions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverPasswordRequest {
    pub email: String,
    pub new_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_answers: Option<SecurityAnswers>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_mongo_id_alias() {
        let raw = r#"{"_id":"64f1c7","name":"Ada","email":"ada@example.com"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, "64f1c7");

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""id":"64f1c7""#));
    }

    #[test]
    fn test_auth_payload_envelope_deserialization() {
        let raw = r#"{"data":{"token":"jwt-token","user":{"id":"1","name":"Ada","email":"ada@example.com"}}}"#;
        let envelope: ApiData<AuthPayload> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.token, "jwt-token");
        assert_eq!(envelope.data.user.email, "ada@example.com");
    }

    #[test]
    fn test_status_message_defaults_empty_message() {
        let status: StatusMessage = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(status.success);
        assert_eq!(status.message, "");
    }

    #[test]
    fn test_change_password_request_uses_camel_case() {
        let request = ChangePasswordRequest {
            current_password: "old-pass".to_string(),
            new_password: "new-pass".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("currentPassword"));
        assert!(json.contains("newPassword"));
    }

    #[test]
    fn test_recover_password_request_omits_missing_answers() {
        let without = RecoverPasswordRequest {
            email: "ada@example.com".to_string(),
            new_password: "Sn0wy123".to_string(),
            security_answers: None,
        };
        let json = serde_json::to_string(&without).unwrap();
        assert!(!json.contains("securityAnswers"));
        assert!(json.contains("newPassword"));

        let with = RecoverPasswordRequest {
            security_answers: Some(SecurityAnswers {
                question1: "q1".to_string(),
                answer1: "Rex".to_string(),
                question2: "q7".to_string(),
                answer2: "Casablanca".to_string(),
            }),
            ..without
        };
        let json = serde_json::to_string(&with).unwrap();
        assert!(json.contains("securityAnswers"));
        assert!(json.contains(r#""question1":"q1""#));
    }
}
