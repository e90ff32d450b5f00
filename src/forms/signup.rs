//! Signup form controller: email, password and confirmation input with
//! strength feedback, submission to the signup endpoint and result state. The
//! confirmation value never leaves the controller.

use crate::forms::{
    client::AuthApi,
    fields::{valid_email, FieldErrors, FieldId, Notice, SubmitOutcome},
    navigator::{Navigator, LOGIN_ROUTE},
    types::SignupRequest,
};
use std::sync::Arc;
use tracing::warn;

/// Minimum password length enforced by validation.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Display-only hint for the password field; never a validation gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    #[must_use]
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => Self::None,
            1..=5 => Self::Weak,
            6..=9 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// Label shown next to the strength meter.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

pub struct SignupForm {
    email: String,
    password: String,
    confirm_password: String,
    errors: FieldErrors,
    notice: Option<Notice>,
    loading: bool,
    api: Arc<dyn AuthApi>,
    navigator: Arc<dyn Navigator>,
}

impl SignupForm {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            errors: FieldErrors::default(),
            notice: None,
            loading: false,
            api,
            navigator,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Strength hint for the current password value.
    #[must_use]
    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::of(&self.password)
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.errors.clear(FieldId::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.errors.clear(FieldId::Password);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        self.errors.clear(FieldId::ConfirmPassword);
    }

    /// Recompute all field errors for the current values.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.email.is_empty() {
            errors.insert(FieldId::Email, "Email is required");
        } else if !valid_email(&self.email) {
            errors.insert(FieldId::Email, "Please enter a valid email");
        }

        if self.password.is_empty() {
            errors.insert(FieldId::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.insert(FieldId::Password, "Password must be at least 6 characters");
        }

        if self.confirm_password.is_empty() {
            errors.insert(FieldId::ConfirmPassword, "Please confirm your password");
        } else if self.confirm_password != self.password {
            errors.insert(FieldId::ConfirmPassword, "Passwords do not match");
        }

        errors
    }

    /// Validate and, when clean, send email and password to the signup
    /// endpoint. The confirmation is never transmitted.
    ///
    /// On success the user is sent to the login page to sign in with the new
    /// account. Rejections and transport failures become an error notice.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Blocked;
        }

        let errors = self.validate();
        if let Some(focus) = errors.first_invalid() {
            self.errors = errors;
            return SubmitOutcome::Invalid { focus };
        }

        self.errors = FieldErrors::default();
        self.notice = None;
        self.loading = true;

        let request = SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        match self.api.signup(&request).await {
            Ok(reply) if reply.ok && reply.success => {
                let message = reply
                    .message
                    .unwrap_or_else(|| "Account created successfully!".to_string());
                self.notice = Some(Notice::success(message));
                self.navigator.navigate(LOGIN_ROUTE);
            }
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| "Failed to create account".to_string());
                self.notice = Some(Notice::error(message));
            }
            Err(err) => {
                warn!(error = %err, "signup request failed");
                self.notice =
                    Some(Notice::error("A network error occurred. Please try again."));
            }
        }

        self.loading = false;
        SubmitOutcome::Settled
    }
}
