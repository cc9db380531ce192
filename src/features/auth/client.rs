//! Typed client for the auth endpoints. Thin wrappers over the shared
//! HTTP helpers so routes never build requests by hand.

use crate::app_lib::{api, errors::AppError};
use crate::features::auth::types::{
    ApiData, AuthPayload, ChangePasswordRequest, LoginRequest, RecoverPasswordRequest,
    RegisterRequest, StatusMessage, UpdateProfileRequest, User, VerifyEmailRequest,
};

/// Creates an account and returns the issued session pair.
pub async fn register(request: &RegisterRequest) -> Result<AuthPayload, AppError> {
    let response: ApiData<AuthPayload> = api::post_json("/auth/register", request).await?;
    Ok(response.data)
}

/// Exchanges credentials for a session pair.
pub async fn login(request: &LoginRequest) -> Result<AuthPayload, AppError> {
    let response: ApiData<AuthPayload> = api::post_json("/auth/login", request).await?;
    Ok(response.data)
}

/// Fetches the profile behind the stored token.
pub async fn current_user() -> Result<User, AppError> {
    let response: ApiData<User> = api::get_json_with_auth("/auth/me").await?;
    Ok(response.data)
}

/// Saves profile changes and returns the updated profile.
pub async fn update_profile(request: &UpdateProfileRequest) -> Result<User, AppError> {
    let response: ApiData<User> = api::put_json_with_auth("/auth/profile", request).await?;
    Ok(response.data)
}

/// Changes the account password; any non-success status is an error.
pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), AppError> {
    api::put_json_with_auth_empty("/auth/change-password", request).await
}

/// Checks that an email belongs to a recoverable account.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<StatusMessage, AppError> {
    api::post_json("/auth/verify-email", request).await
}

/// Resets the password for a previously verified email.
pub async fn recover_password(request: &RecoverPasswordRequest) -> Result<StatusMessage, AppError> {
    api::post_json("/auth/recover-password", request).await
}
