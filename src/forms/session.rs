//! In-memory session store with an explicit init/clear lifecycle. The token
//! never touches ambient storage and is wrapped so it stays out of logs.

use secrecy::SecretString;
use std::sync::{Arc, RwLock};

/// Shared store for the auth token returned by a successful login.
///
/// Clones share the same token; dropping the last clone drops the token.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<SecretString>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token after login.
    pub fn init(&self, token: SecretString) {
        match self.inner.write() {
            Ok(mut guard) => *guard = Some(token),
            Err(poisoned) => *poisoned.into_inner() = Some(token),
        }
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Drop the token, typically on logout.
    pub fn clear(&self) {
        match self.inner.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
