//! Login form state: two validated fields plus the last submission error

use super::field::FormField;
use super::validation::Rule;
use thiserror::Error;

/// Minimum accepted password length
pub const PASSWORD_MIN_LEN: usize = 6;

/// Form-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a valid email and password (min 6 characters)")]
    SubmissionBlocked,
}

/// Identifies one of the login form's text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Email,
    Password,
}

/// Identity behind an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Credentials),
    Blocked,
}

/// Everything a renderer needs to draw the form, already resolved
/// against touched state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFormView {
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub error_message: Option<String>,
    pub submit_enabled: bool,
}

/// Login form with email and password fields
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    submit_error: Option<SubmitError>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("Email", vec![Rule::Required, Rule::Email]),
            password: FormField::text(
                "Password",
                vec![Rule::Required, Rule::MinLength(PASSWORD_MIN_LEN)],
            ),
            submit_error: None,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set_text(value.into());
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set_text(value.into());
    }

    /// Apply an in-place edit to a field's value and store it through
    /// the field's setter
    pub fn edit(&mut self, name: FieldName, edit: impl FnOnce(&mut String)) {
        let mut value = self.field(name).as_text().to_string();
        edit(&mut value);
        match name {
            FieldName::Email => self.set_email(value),
            FieldName::Password => self.set_password(value),
        }
    }

    /// Mark a field touched (on blur)
    pub fn touch(&mut self, name: FieldName) {
        self.field_mut(name).touch();
    }

    /// Form is valid iff every field is valid; this alone drives the
    /// submit button's enabled state.
    pub fn is_valid(&self) -> bool {
        self.email.is_valid() && self.password.is_valid()
    }

    /// Attempt to submit the form
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_valid() {
            tracing::debug!(
                email = ?self.email.errors(),
                password = ?self.password.errors(),
                "submission blocked"
            );
            self.submit_error = Some(SubmitError::SubmissionBlocked);
            self.email.touch();
            self.password.touch();
            return SubmitOutcome::Blocked;
        }

        self.submit_error = None;
        SubmitOutcome::Accepted(Credentials {
            email: self.email.as_text().to_string(),
        })
    }

    /// Clear all values, touched flags and the submission error
    pub fn reset(&mut self) {
        self.email.reset();
        self.password.reset();
        self.submit_error = None;
    }

    /// Submission error text, empty when there is none
    pub fn error_message(&self) -> String {
        self.submit_error
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    pub fn view(&self) -> LoginFormView {
        LoginFormView {
            email_error: self.email.visible_error(),
            password_error: self.password.visible_error(),
            error_message: Some(self.error_message()).filter(|m| !m.is_empty()),
            submit_enabled: self.is_valid(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validation::ValidationError;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const VALID_EMAIL: &str = "test@example.com";
    const VALID_PASSWORD: &str = "password123";

    fn assert_pristine(form: &LoginForm) {
        assert_eq!(form.email.as_text(), "");
        assert_eq!(form.password.as_text(), "");
        assert!(!form.email.is_touched());
        assert!(!form.password.is_touched());
        assert_eq!(form.error_message(), "");
    }

    #[test]
    fn test_initializes_empty() {
        let form = LoginForm::new();
        assert_pristine(&form);
        assert!(!form.is_valid());
        assert_eq!(
            form.view(),
            LoginFormView {
                email_error: None,
                password_error: None,
                error_message: None,
                submit_enabled: false,
            }
        );
    }

    #[test]
    fn test_touch_email_only_shows_email_error() {
        let mut form = LoginForm::new();
        form.touch(FieldName::Email);
        let view = form.view();
        assert!(!view.submit_enabled);
        assert_eq!(view.email_error.as_deref(), Some("Email is required"));
        assert_eq!(view.password_error, None);
    }

    #[test]
    fn test_touch_password_shows_required() {
        let mut form = LoginForm::new();
        form.touch(FieldName::Password);
        assert_eq!(
            form.view().password_error.as_deref(),
            Some("Password is required")
        );
    }

    #[test]
    fn test_email_format_scenario() {
        let mut form = LoginForm::new();
        form.set_email("notanemail");
        form.touch(FieldName::Email);
        let error = form.view().email_error.unwrap();
        assert!(error.contains("valid email"), "got {error}");

        form.set_email(VALID_EMAIL);
        form.touch(FieldName::Email);
        assert_eq!(form.view().email_error, None);
    }

    #[test]
    fn test_password_length_scenario() {
        let mut form = LoginForm::new();
        form.set_password("12345");
        form.touch(FieldName::Password);
        let error = form.view().password_error.unwrap();
        assert!(error.contains("at least 6 characters"), "got {error}");

        form.set_password("123456");
        assert_eq!(form.view().password_error, None);
        assert_eq!(form.password.error(), None);
    }

    #[test]
    fn test_required_takes_precedence() {
        let form = LoginForm::new();
        assert_eq!(form.email.errors(), &[ValidationError::RequiredMissing]);
        assert_eq!(form.password.errors(), &[ValidationError::RequiredMissing]);
    }

    #[test]
    fn test_submit_enabled_only_when_both_valid() {
        let mut form = LoginForm::new();
        form.set_email(VALID_EMAIL);
        assert!(!form.view().submit_enabled);
        form.set_password(VALID_PASSWORD);
        assert!(form.view().submit_enabled);
        form.set_email("notanemail");
        assert!(!form.view().submit_enabled);
    }

    #[test]
    fn test_submit_invalid_sets_error_and_touches_all() {
        let mut form = LoginForm::new();
        form.set_email("notanemail");
        form.set_password("12345");

        assert_eq!(form.submit(), SubmitOutcome::Blocked);
        assert_eq!(
            form.error_message(),
            "Please enter a valid email and password (min 6 characters)"
        );
        let view = form.view();
        assert!(view.email_error.is_some());
        assert!(view.password_error.is_some());
        assert!(view.error_message.is_some());
    }

    #[test]
    fn test_valid_submit_clears_error_then_reset() {
        let mut form = LoginForm::new();
        form.submit();
        assert!(!form.error_message().is_empty());

        form.set_email(VALID_EMAIL);
        form.set_password(VALID_PASSWORD);
        assert_eq!(
            form.submit(),
            SubmitOutcome::Accepted(Credentials {
                email: VALID_EMAIL.to_string(),
            })
        );
        assert_eq!(form.error_message(), "");

        form.reset();
        assert_pristine(&form);
    }

    #[test]
    fn test_edit_revalidates_through_setters() {
        let mut form = LoginForm::new();
        form.edit(FieldName::Password, |v| v.push_str("12345"));
        assert!(!form.password.is_valid());
        form.edit(FieldName::Password, |v| v.push('6'));
        assert_eq!(form.password.as_text(), "123456");
        assert!(form.password.is_valid());

        form.edit(FieldName::Email, |v| v.push_str(VALID_EMAIL));
        assert!(form.is_valid());
        form.edit(FieldName::Email, |v| {
            v.pop();
        });
        assert_eq!(form.email.as_text(), "test@example.co");
        form.edit(FieldName::Email, String::clear);
        assert_eq!(form.email.error(), Some(ValidationError::RequiredMissing));
        assert_eq!(form.password.as_text(), "123456");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut form = LoginForm::new();
        form.set_email(VALID_EMAIL);
        form.set_password("12345");
        form.touch(FieldName::Password);
        form.submit();

        form.reset();
        assert_pristine(&form);
        form.reset();
        assert_pristine(&form);
        assert_eq!(form.view(), LoginForm::new().view());
    }

    proptest! {
        #[test]
        fn prop_submit_enabled_ignores_touched(
            email in "[a-z@.]{0,12}",
            password in "[a-z0-9]{0,10}",
            touch_email in any::<bool>(),
            touch_password in any::<bool>(),
        ) {
            let mut form = LoginForm::new();
            form.set_email(email);
            form.set_password(password);
            let expected = form.email.is_valid() && form.password.is_valid();
            if touch_email {
                form.touch(FieldName::Email);
            }
            if touch_password {
                form.touch(FieldName::Password);
            }
            prop_assert_eq!(form.view().submit_enabled, expected);
        }

        #[test]
        fn prop_password_validity_tracks_length(password in "[a-z0-9]{1,12}") {
            let mut form = LoginForm::new();
            form.set_password(password.clone());
            prop_assert_eq!(form.password.is_valid(), password.len() >= PASSWORD_MIN_LEN);
        }
    }
}
