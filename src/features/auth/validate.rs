//! Client-side form checks shared by the auth pages. These exist to give
//! immediate feedback before a request is built; the API revalidates
//! everything server-side.

use crate::app_lib::errors::AppError;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Lowercases and trims an email address so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Accepts addresses with a user part, a single `@`, and a dotted domain.
pub fn valid_email(email: &str) -> bool {
    let Some((user, host)) = email.split_once('@') else {
        return false;
    };
    if user.is_empty() || user.contains(char::is_whitespace) {
        return false;
    }
    if host.contains('@') || host.contains(char::is_whitespace) {
        return false;
    }
    match host.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Checks email syntax before any network call.
pub fn check_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::Validation("Please enter your email".to_string()));
    }
    if !valid_email(email) {
        return Err(AppError::Validation(
            "Please enter a valid email".to_string(),
        ));
    }
    Ok(())
}

/// Checks a new password and its confirmation before any network call.
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if password != confirm {
        return Err(AppError::Validation(
            "The two passwords do not match".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
    }

    #[test]
    fn valid_email_accepts_common_addresses() {
        assert!(valid_email("ada@example.com"));
        assert!(valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn valid_email_rejects_malformed_addresses() {
        assert!(!valid_email(""));
        assert!(!valid_email("no-at-sign"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("ada@example"));
        assert!(!valid_email("ada@.com"));
        assert!(!valid_email("ada@example."));
        assert!(!valid_email("ada bad@example.com"));
        assert!(!valid_email("ada@@example.com"));
    }

    #[test]
    fn check_email_reports_missing_and_invalid() {
        assert_eq!(
            check_email(""),
            Err(AppError::Validation("Please enter your email".to_string()))
        );
        assert_eq!(
            check_email("not-an-email"),
            Err(AppError::Validation(
                "Please enter a valid email".to_string()
            ))
        );
        assert_eq!(check_email("ada@example.com"), Ok(()));
    }

    #[test]
    fn check_new_password_enforces_length_then_match() {
        assert_eq!(
            check_new_password("short", "short"),
            Err(AppError::Validation(
                "Password must be at least 6 characters".to_string()
            ))
        );
        assert_eq!(
            check_new_password("longenough", "different"),
            Err(AppError::Validation(
                "The two passwords do not match".to_string()
            ))
        );
        assert_eq!(check_new_password("Sn0wy123", "Sn0wy123"), Ok(()));
    }
}
