//! Password recovery flow: email verification, optional security
//! questions, new password, and a confirmation hand-off. All transitions
//! run through [`RecoveryFlow`] and only ever advance on a confirmed
//! server success; submissions made from the wrong step are ignored.
//! There is no client-side answer checking: the chosen questions and
//! answers travel with the recover-password request and the server
//! decides.

use crate::app_lib::errors::AppError;
use crate::features::auth::types::{RecoverPasswordRequest, SecurityAnswers, StatusMessage};

/// Titles for the four indicator stations shown above every step.
pub const STEP_TITLES: [&str; 4] = [
    "Email Verification",
    "Security Questions",
    "New Password",
    "Confirmation",
];

/// Security questions offered during recovery, keyed by question id.
pub const SECURITY_QUESTIONS: [(&str, &str); 10] = [
    ("q1", "What was your childhood nickname?"),
    ("q2", "In what city were you born?"),
    ("q3", "What is the name of your first pet?"),
    ("q4", "What is your mother's maiden name?"),
    ("q5", "What high school did you attend?"),
    ("q6", "What was the make of your first car?"),
    ("q7", "What is your favorite movie?"),
    ("q8", "What is your favorite book?"),
    ("q9", "What was the street you grew up on?"),
    ("q10", "What was the name of your elementary school?"),
];

/// Questions offered for the first select.
pub fn first_question_group() -> &'static [(&'static str, &'static str)] {
    &SECURITY_QUESTIONS[..5]
}

/// Questions offered for the second select.
pub fn second_question_group() -> &'static [(&'static str, &'static str)] {
    &SECURITY_QUESTIONS[5..]
}

/// Steps of the recovery flow, in visit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryStep {
    /// Collect and verify the account email.
    Email,
    /// Collect security questions and answers (opt-in).
    Security,
    /// Collect the replacement password.
    NewPassword,
    /// Show the reset password until the user confirms saving it.
    Password,
    /// Terminal step pointing back to login.
    Success,
}

/// Outcome message surfaced to the user after a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Driving state of the recovery flow.
#[derive(Clone, Debug, PartialEq)]
pub struct RecoveryFlow {
    step: RecoveryStep,
    email: String,
    use_security_questions: bool,
    answers: Option<SecurityAnswers>,
    recovered_password: Option<String>,
}

impl Default for RecoveryFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryFlow {
    pub fn new() -> Self {
        Self {
            step: RecoveryStep::Email,
            email: String::new(),
            use_security_questions: false,
            answers: None,
            recovered_password: None,
        }
    }

    pub fn step(&self) -> RecoveryStep {
        self.step
    }

    /// Verified account email, empty until the email step succeeds.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn use_security_questions(&self) -> bool {
        self.use_security_questions
    }

    /// Reset password held for one-time display on the confirmation step.
    pub fn recovered_password(&self) -> Option<&str> {
        self.recovered_password.as_deref()
    }

    /// Position on the four-station step indicator.
    pub fn indicator_index(&self) -> usize {
        match self.step {
            RecoveryStep::Email => 0,
            RecoveryStep::Security => 1,
            RecoveryStep::NewPassword => 2,
            RecoveryStep::Password | RecoveryStep::Success => 3,
        }
    }

    /// Applies the verify-email outcome. Advances to the security step or
    /// straight to the new password, depending on the opt-in; every
    /// failure keeps the flow on the email step.
    pub fn apply_verify_email(
        &mut self,
        email: &str,
        use_security_questions: bool,
        result: &Result<StatusMessage, AppError>,
    ) -> Option<Notice> {
        if self.step != RecoveryStep::Email {
            return None;
        }

        match result {
            Ok(status) if status.success => {
                self.email = email.to_string();
                self.use_security_questions = use_security_questions;
                self.step = if use_security_questions {
                    RecoveryStep::Security
                } else {
                    RecoveryStep::NewPassword
                };
                Some(Notice::Success("Email verified successfully!".to_string()))
            }
            Ok(_) => Some(Notice::Error("Email verification failed".to_string())),
            Err(err) => Some(Notice::Error(verify_email_error(err))),
        }
    }

    /// Records the chosen questions and answers and moves on. The answers
    /// are only checked server-side as part of the recover-password call.
    pub fn submit_security_answers(&mut self, answers: SecurityAnswers) {
        if self.step != RecoveryStep::Security {
            return;
        }

        self.answers = Some(answers);
        self.step = RecoveryStep::NewPassword;
    }

    /// Builds the recover-password request from the collected state.
    pub fn recover_request(&self, new_password: &str) -> RecoverPasswordRequest {
        RecoverPasswordRequest {
            email: self.email.clone(),
            new_password: new_password.to_string(),
            security_answers: if self.use_security_questions {
                self.answers.clone()
            } else {
                None
            },
        }
    }

    /// Applies the recover-password outcome. On success the submitted
    /// password is kept for one-time display; every failure stays on the
    /// new-password step.
    pub fn apply_recover_password(
        &mut self,
        new_password: &str,
        result: &Result<StatusMessage, AppError>,
    ) -> Option<Notice> {
        if self.step != RecoveryStep::NewPassword {
            return None;
        }

        match result {
            Ok(status) if status.success => {
                self.recovered_password = Some(new_password.to_string());
                self.step = RecoveryStep::Password;
                Some(Notice::Success(
                    "Password has been reset successfully!".to_string(),
                ))
            }
            Ok(_) => Some(Notice::Error("Password could not be reset".to_string())),
            Err(err) => Some(Notice::Error(recover_password_error(err))),
        }
    }

    /// Confirms the reset password was saved and finishes the flow.
    pub fn acknowledge_saved(&mut self) -> Option<Notice> {
        if self.step != RecoveryStep::Password {
            return None;
        }

        self.step = RecoveryStep::Success;
        Some(Notice::Success(
            "Password has been successfully reset!".to_string(),
        ))
    }

    /// Steps back one station. Entered values are kept so moving forward
    /// again does not start over.
    pub fn back(&mut self) {
        self.step = match self.step {
            RecoveryStep::Security => RecoveryStep::Email,
            RecoveryStep::NewPassword if self.use_security_questions => RecoveryStep::Security,
            RecoveryStep::NewPassword => RecoveryStep::Email,
            step => step,
        };
    }
}

fn verify_email_error(err: &AppError) -> String {
    match err {
        AppError::Server {
            status: 404,
            message,
        } => fallback_if_empty(message, "Email not found in our database"),
        AppError::Server { message, .. } => fallback_if_empty(message, "Error verifying email"),
        _ => "Error connecting to server. Please try again later.".to_string(),
    }
}

fn recover_password_error(err: &AppError) -> String {
    match err {
        AppError::Server { message, .. } => fallback_if_empty(message, "Error resetting password"),
        _ => "Error connecting to server. Please try again later.".to_string(),
    }
}

fn fallback_if_empty(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_status() -> Result<StatusMessage, AppError> {
        Ok(StatusMessage {
            success: true,
            message: String::new(),
        })
    }

    fn rejected_status() -> Result<StatusMessage, AppError> {
        Ok(StatusMessage {
            success: false,
            message: String::new(),
        })
    }

    fn server_error(status: u16, message: &str) -> Result<StatusMessage, AppError> {
        Err(AppError::Server {
            status,
            message: message.to_string(),
        })
    }

    fn sample_answers() -> SecurityAnswers {
        SecurityAnswers {
            question1: "q3".to_string(),
            answer1: "Rex".to_string(),
            question2: "q7".to_string(),
            answer2: "Casablanca".to_string(),
        }
    }

    #[test]
    fn new_flow_starts_at_email_verification() {
        let flow = RecoveryFlow::new();
        assert_eq!(flow.step(), RecoveryStep::Email);
        assert_eq!(flow.indicator_index(), 0);
        assert_eq!(flow.email(), "");
        assert_eq!(flow.recovered_password(), None);
    }

    #[test]
    fn verify_success_with_questions_moves_to_security() {
        let mut flow = RecoveryFlow::new();
        let notice = flow.apply_verify_email("ada@example.com", true, &ok_status());

        assert_eq!(flow.step(), RecoveryStep::Security);
        assert_eq!(flow.indicator_index(), 1);
        assert_eq!(flow.email(), "ada@example.com");
        assert_eq!(
            notice,
            Some(Notice::Success("Email verified successfully!".to_string()))
        );
    }

    #[test]
    fn verify_success_without_questions_skips_to_new_password() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", false, &ok_status());

        assert_eq!(flow.step(), RecoveryStep::NewPassword);
        assert_eq!(flow.indicator_index(), 2);
    }

    #[test]
    fn verify_not_found_stays_on_email_with_database_message() {
        let mut flow = RecoveryFlow::new();
        let notice = flow.apply_verify_email("nobody@example.com", false, &server_error(404, ""));

        assert_eq!(flow.step(), RecoveryStep::Email);
        assert_eq!(flow.indicator_index(), 0);
        assert_eq!(flow.email(), "");
        assert_eq!(
            notice,
            Some(Notice::Error("Email not found in our database".to_string()))
        );
    }

    #[test]
    fn verify_not_found_prefers_server_message() {
        let mut flow = RecoveryFlow::new();
        let notice = flow.apply_verify_email(
            "nobody@example.com",
            false,
            &server_error(404, "No account for that address"),
        );

        assert_eq!(
            notice,
            Some(Notice::Error("No account for that address".to_string()))
        );
    }

    #[test]
    fn verify_server_error_uses_generic_message() {
        let mut flow = RecoveryFlow::new();
        let notice = flow.apply_verify_email("ada@example.com", false, &server_error(500, ""));

        assert_eq!(flow.step(), RecoveryStep::Email);
        assert_eq!(notice, Some(Notice::Error("Error verifying email".to_string())));
    }

    #[test]
    fn verify_rejection_stays_on_email() {
        let mut flow = RecoveryFlow::new();
        let notice = flow.apply_verify_email("ada@example.com", false, &rejected_status());

        assert_eq!(flow.step(), RecoveryStep::Email);
        assert_eq!(
            notice,
            Some(Notice::Error("Email verification failed".to_string()))
        );
    }

    #[test]
    fn verify_transport_failure_maps_to_connection_message() {
        let mut flow = RecoveryFlow::new();
        let notice = flow.apply_verify_email(
            "ada@example.com",
            false,
            &Err(AppError::Timeout("Request timed out. Please try again.".to_string())),
        );

        assert_eq!(flow.step(), RecoveryStep::Email);
        assert_eq!(
            notice,
            Some(Notice::Error(
                "Error connecting to server. Please try again later.".to_string()
            ))
        );
    }

    #[test]
    fn security_answers_are_recorded_and_forwarded() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", true, &ok_status());
        flow.submit_security_answers(sample_answers());

        assert_eq!(flow.step(), RecoveryStep::NewPassword);

        let request = flow.recover_request("Sn0wy123");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.new_password, "Sn0wy123");
        assert_eq!(request.security_answers, Some(sample_answers()));
    }

    #[test]
    fn recover_request_omits_answers_without_opt_in() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", false, &ok_status());

        let request = flow.recover_request("Sn0wy123");
        assert_eq!(request.security_answers, None);
    }

    #[test]
    fn recover_success_keeps_submitted_password_for_display() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", false, &ok_status());
        let notice = flow.apply_recover_password("Sn0wy123", &ok_status());

        assert_eq!(flow.step(), RecoveryStep::Password);
        assert_eq!(flow.indicator_index(), 3);
        assert_eq!(flow.recovered_password(), Some("Sn0wy123"));
        assert_eq!(
            notice,
            Some(Notice::Success(
                "Password has been reset successfully!".to_string()
            ))
        );
    }

    #[test]
    fn recover_rejection_stays_on_new_password() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", false, &ok_status());
        let notice = flow.apply_recover_password("Sn0wy123", &rejected_status());

        assert_eq!(flow.step(), RecoveryStep::NewPassword);
        assert_eq!(flow.recovered_password(), None);
        assert_eq!(
            notice,
            Some(Notice::Error("Password could not be reset".to_string()))
        );
    }

    #[test]
    fn recover_failure_prefers_server_message() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", true, &ok_status());
        flow.submit_security_answers(sample_answers());
        let notice =
            flow.apply_recover_password("Sn0wy123", &server_error(403, "Security answers did not match"));

        assert_eq!(flow.step(), RecoveryStep::NewPassword);
        assert_eq!(
            notice,
            Some(Notice::Error("Security answers did not match".to_string()))
        );
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut flow = RecoveryFlow::new();

        assert_eq!(flow.apply_recover_password("Sn0wy123", &ok_status()), None);
        assert_eq!(flow.step(), RecoveryStep::Email);

        flow.submit_security_answers(sample_answers());
        assert_eq!(flow.step(), RecoveryStep::Email);

        assert_eq!(flow.acknowledge_saved(), None);
        assert_eq!(flow.step(), RecoveryStep::Email);
    }

    #[test]
    fn security_step_is_not_skipped_when_requested() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", true, &ok_status());

        assert_eq!(flow.apply_recover_password("Sn0wy123", &ok_status()), None);
        assert_eq!(flow.step(), RecoveryStep::Security);
    }

    #[test]
    fn acknowledge_finishes_the_flow() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", false, &ok_status());
        flow.apply_recover_password("Sn0wy123", &ok_status());
        let notice = flow.acknowledge_saved();

        assert_eq!(flow.step(), RecoveryStep::Success);
        assert_eq!(flow.indicator_index(), 3);
        assert_eq!(
            notice,
            Some(Notice::Success(
                "Password has been successfully reset!".to_string()
            ))
        );
    }

    #[test]
    fn back_returns_to_the_previous_station() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", true, &ok_status());
        flow.submit_security_answers(sample_answers());
        assert_eq!(flow.step(), RecoveryStep::NewPassword);

        flow.back();
        assert_eq!(flow.step(), RecoveryStep::Security);

        flow.back();
        assert_eq!(flow.step(), RecoveryStep::Email);
        assert_eq!(flow.email(), "ada@example.com");
    }

    #[test]
    fn back_skips_security_when_not_opted_in() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", false, &ok_status());
        assert_eq!(flow.step(), RecoveryStep::NewPassword);

        flow.back();
        assert_eq!(flow.step(), RecoveryStep::Email);
    }

    #[test]
    fn back_does_nothing_on_terminal_steps() {
        let mut flow = RecoveryFlow::new();
        flow.apply_verify_email("ada@example.com", false, &ok_status());
        flow.apply_recover_password("Sn0wy123", &ok_status());

        flow.back();
        assert_eq!(flow.step(), RecoveryStep::Password);

        flow.acknowledge_saved();
        flow.back();
        assert_eq!(flow.step(), RecoveryStep::Success);
    }

    #[test]
    fn question_groups_split_the_catalog() {
        assert_eq!(first_question_group().len(), 5);
        assert_eq!(second_question_group().len(), 5);
        assert_eq!(first_question_group()[0].0, "q1");
        assert_eq!(second_question_group()[0].0, "q6");
        assert_eq!(STEP_TITLES.len(), 4);
    }
}
