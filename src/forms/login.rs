//! Login form controller: email/password input, validation, submission to the
//! login endpoint and result state. Values persist across rejected submits so
//! the user can correct a single field.

use crate::forms::{
    client::AuthApi,
    fields::{valid_email, FieldErrors, FieldId, Notice, SubmitOutcome},
    navigator::{Navigator, DASHBOARD_ROUTE},
    session::SessionStore,
    types::LoginRequest,
};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::warn;

pub struct LoginForm {
    email: String,
    password: String,
    errors: FieldErrors,
    notice: Option<Notice>,
    loading: bool,
    api: Arc<dyn AuthApi>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl LoginForm {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            errors: FieldErrors::default(),
            notice: None,
            loading: false,
            api,
            session,
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
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while a submission's network call is outstanding; the view keeps
    /// the submit button disabled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        // Clear the error once the user starts editing the field
        self.errors.clear(FieldId::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.errors.clear(FieldId::Password);
    }

    /// Reset values, errors and the notice, e.g. when switching forms.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.errors = FieldErrors::default();
        self.notice = None;
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
        }

        errors
    }

    /// Validate and, when clean, send the credentials to the login endpoint.
    ///
    /// On success the returned token is stored and the user is sent to the
    /// dashboard. Server rejections and transport failures become an error
    /// notice; neither navigates.
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

        let request = LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        // No cancellation: a slow call that settles after the user moved on
        // can still overwrite newer state.
        match self.api.login(&request).await {
            Ok(reply) if reply.ok && reply.success => {
                if let Some(token) = reply.token {
                    self.session.init(SecretString::from(token));
                }
                self.notice = Some(Notice::success("Login successful!"));
                self.navigator.navigate(DASHBOARD_ROUTE);
            }
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| "Invalid email or password".to_string());
                self.notice = Some(Notice::error(message));
            }
            Err(err) => {
                warn!(error = %err, "login request failed");
                self.notice =
                    Some(Notice::error("A network error occurred. Please try again."));
            }
        }

        self.loading = false;
        SubmitOutcome::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields::NoticeKind;
    use crate::forms::navigator::RecordingNavigator;
    use crate::forms::testing::StubAuthApi;
    use crate::forms::types::{LoginReply, UserSummary};
    use crate::forms::ClientError;
    use secrecy::ExposeSecret;

    fn form_with(stub: Arc<StubAuthApi>) -> (LoginForm, SessionStore, RecordingNavigator) {
        let session = SessionStore::new();
        let navigator = RecordingNavigator::new();
        let form = LoginForm::new(stub, session.clone(), Arc::new(navigator.clone()));
        (form, session, navigator)
    }

    fn accepted_reply() -> LoginReply {
        LoginReply {
            ok: true,
            success: true,
            message: None,
            user: Some(UserSummary {
                id: "1".to_string(),
                email: "test@example.com".to_string(),
            }),
            token: Some("demo-jwt-token-x".to_string()),
        }
    }

    fn rejected_reply(message: Option<&str>) -> LoginReply {
        LoginReply {
            ok: false,
            success: false,
            message: message.map(ToString::to_string),
            user: None,
            token: None,
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let (form, _, _) = form_with(StubAuthApi::new());
        let errors = form.validate();
        assert_eq!(errors.get(FieldId::Email), Some("Email is required"));
        assert_eq!(errors.get(FieldId::Password), Some("Password is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn malformed_email_yields_the_format_error() {
        let (mut form, _, _) = form_with(StubAuthApi::new());
        form.set_email("invalid-email");
        form.set_password("password123");
        let errors = form.validate();
        assert_eq!(errors.get(FieldId::Email), Some("Please enter a valid email"));
        assert!(errors.get(FieldId::Password).is_none());
    }

    #[tokio::test]
    async fn invalid_submit_skips_the_network_and_focuses_first_field() {
        let stub = StubAuthApi::new();
        let (mut form, _, navigator) = form_with(stub.clone());
        form.set_email("invalid-email");

        let outcome = form.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                focus: FieldId::Email
            }
        );
        // Values persist so the user can correct a single field
        assert_eq!(form.email(), "invalid-email");
        assert!(stub.seen_logins().is_empty());
        assert!(navigator.last().is_none());
    }

    #[tokio::test]
    async fn editing_a_field_clears_only_its_error() {
        let (mut form, _, _) = form_with(StubAuthApi::new());
        form.submit().await;
        assert!(form.errors().get(FieldId::Email).is_some());
        assert!(form.errors().get(FieldId::Password).is_some());

        form.set_email("test@example.com");
        assert!(form.errors().get(FieldId::Email).is_none());
        assert_eq!(
            form.errors().get(FieldId::Password),
            Some("Password is required")
        );
    }

    #[tokio::test]
    async fn successful_login_stores_token_and_navigates() {
        let stub = StubAuthApi::new().with_login(Ok(accepted_reply()));
        let (mut form, session, navigator) = form_with(stub.clone());
        form.set_email("test@example.com");
        form.set_password("password123");

        let outcome = form.submit().await;
        assert_eq!(outcome, SubmitOutcome::Settled);
        assert!(!form.is_loading());
        assert_eq!(
            form.notice().map(|notice| notice.kind),
            Some(NoticeKind::Success)
        );
        assert_eq!(
            session.token().map(|token| token.expose_secret().to_string()),
            Some("demo-jwt-token-x".to_string())
        );
        assert_eq!(navigator.last().as_deref(), Some(DASHBOARD_ROUTE));

        let seen = stub.seen_logins();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].email, "test@example.com");
    }

    #[tokio::test]
    async fn rejection_shows_the_server_message_without_navigating() {
        let stub = StubAuthApi::new().with_login(Ok(rejected_reply(Some("Invalid email or password"))));
        let (mut form, session, navigator) = form_with(stub);
        form.set_email("a@b.com");
        form.set_password("wrong");

        let outcome = form.submit().await;
        assert_eq!(outcome, SubmitOutcome::Settled);
        assert_eq!(
            form.notice(),
            Some(&Notice::error("Invalid email or password"))
        );
        assert!(session.token().is_none());
        assert!(navigator.last().is_none());
    }

    #[tokio::test]
    async fn rejection_without_message_uses_the_generic_fallback() {
        let stub = StubAuthApi::new().with_login(Ok(rejected_reply(None)));
        let (mut form, _, _) = form_with(stub);
        form.set_email("a@b.com");
        form.set_password("wrong");

        form.submit().await;
        assert_eq!(
            form.notice(),
            Some(&Notice::error("Invalid email or password"))
        );
    }

    #[tokio::test]
    async fn transport_failure_shows_the_network_notice() {
        let stub = StubAuthApi::new()
            .with_login(Err(ClientError::Network("connection refused".to_string())));
        let (mut form, _, navigator) = form_with(stub);
        form.set_email("test@example.com");
        form.set_password("password123");

        form.submit().await;
        assert_eq!(
            form.notice(),
            Some(&Notice::error(
                "A network error occurred. Please try again."
            ))
        );
        assert!(!form.is_loading());
        assert!(navigator.last().is_none());
    }

    #[tokio::test]
    async fn submit_is_blocked_while_loading() {
        let (mut form, _, _) = form_with(StubAuthApi::new());
        form.set_email("test@example.com");
        form.set_password("password123");
        form.loading = true;

        assert_eq!(form.submit().await, SubmitOutcome::Blocked);
        assert!(form.notice().is_none());
    }

    #[tokio::test]
    async fn a_new_submission_clears_the_previous_notice() {
        let stub = StubAuthApi::new()
            .with_login(Ok(rejected_reply(None)))
            .with_login(Ok(accepted_reply()));
        let (mut form, _, _) = form_with(stub);
        form.set_email("test@example.com");
        form.set_password("wrong");
        form.submit().await;
        assert_eq!(
            form.notice().map(|notice| notice.kind),
            Some(NoticeKind::Error)
        );

        form.set_password("password123");
        form.submit().await;
        assert_eq!(
            form.notice().map(|notice| notice.kind),
            Some(NoticeKind::Success)
        );
    }
}
