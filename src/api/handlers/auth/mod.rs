//! Demo auth endpoints backed by fixed accounts instead of a user store.

pub mod login;
pub mod signup;
pub mod types;

use secrecy::{ExposeSecret, SecretString};

/// Default demo account that can sign in.
pub const DEFAULT_LOGIN_EMAIL: &str = "test@example.com";
pub const DEFAULT_LOGIN_PASSWORD: &str = "password123";
/// Default address that signup reports as already registered.
pub const DEFAULT_TAKEN_EMAIL: &str = "existing@example.com";

/// Fixed credentials the demo endpoints validate against.
///
/// There is no persistence: login succeeds for exactly one account and
/// signup conflicts for exactly one address.
#[derive(Debug, Clone)]
pub struct DemoAccounts {
    login_email: String,
    login_password: SecretString,
    taken_email: String,
}

impl DemoAccounts {
    #[must_use]
    pub fn new(login_email: String, login_password: SecretString, taken_email: String) -> Self {
        Self {
            login_email,
            login_password,
            taken_email,
        }
    }

    #[must_use]
    pub fn matches_login(&self, email: &str, password: &str) -> bool {
        self.login_email == email && self.login_password.expose_secret() == password
    }

    #[must_use]
    pub fn is_taken(&self, email: &str) -> bool {
        self.taken_email == email
    }
}

impl Default for DemoAccounts {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOGIN_EMAIL.to_string(),
            SecretString::from(DEFAULT_LOGIN_PASSWORD.to_string()),
            DEFAULT_TAKEN_EMAIL.to_string(),
        )
    }
}
