//! Login form state and pure submission logic.
//!
//! # Design
//! - Presence validation blocks the network call; the backend stays the
//!   source of truth for anything beyond presence.
//! - Credential mismatch and transport failure surface different messages.
//! - One best-effort attempt per submit; no retry or backoff.

use crate::services::error::ApiError;

/// Login form controller state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginForm {
    /// Email field value.
    pub email: String,
    /// Phone field value (used as the shared secret).
    pub telephone: String,
    /// Display message for the last failed attempt.
    pub error: Option<String>,
    /// Whether a submit is in flight.
    pub submitting: bool,
}

impl LoginForm {
    /// Whether both required fields are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.telephone.trim().is_empty()
    }

    /// Start a submission attempt: clear the prior error, mark busy.
    pub fn begin_submit(&mut self) {
        self.error = None;
        self.submitting = true;
    }

    /// Record a failed attempt.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.submitting = false;
    }

    /// Settle a submission without an error (the page navigates away on
    /// success, but the flag must drop regardless of outcome).
    pub fn settle(&mut self) {
        self.submitting = false;
    }
}

/// Translation key for the user-facing message of a login failure.
///
/// A credential mismatch is distinguished from every other failure, which
/// all collapse into one generic retry message.
#[must_use]
pub fn error_message_key(error: &ApiError) -> &'static str {
    if error.is_unauthorized() {
        "login.error_credentials"
    } else {
        "login.error_generic"
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginForm, error_message_key};
    use crate::services::error::ApiError;

    #[test]
    fn presence_validation_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.is_complete());
        form.email = "a@exemple.fr".to_string();
        assert!(!form.is_complete());
        form.telephone = " ".to_string();
        assert!(!form.is_complete());
        form.telephone = "0601020304".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn submit_clears_error_and_settles_on_failure() {
        let mut form = LoginForm {
            error: Some("old".to_string()),
            ..LoginForm::default()
        };
        form.begin_submit();
        assert!(form.error.is_none());
        assert!(form.submitting);
        form.fail("nope".to_string());
        assert_eq!(form.error.as_deref(), Some("nope"));
        assert!(!form.submitting);
    }

    #[test]
    fn settle_drops_the_busy_flag() {
        let mut form = LoginForm::default();
        form.begin_submit();
        form.settle();
        assert!(!form.submitting);
        assert!(form.error.is_none());
    }

    #[test]
    fn unauthorized_maps_to_credential_message() {
        assert_eq!(
            error_message_key(&ApiError::Unauthorized),
            "login.error_credentials"
        );
        assert_eq!(
            error_message_key(&ApiError::Network("offline".to_string())),
            "login.error_generic"
        );
        assert_eq!(
            error_message_key(&ApiError::Status(500)),
            "login.error_generic"
        );
    }
}
