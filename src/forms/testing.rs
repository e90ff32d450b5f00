//! Scripted `AuthApi` stub for controller tests.

use crate::forms::client::{AuthApi, ClientError};
use crate::forms::types::{LoginReply, LoginRequest, SignupReply, SignupRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued replies and records every request it sees.
pub(crate) struct StubAuthApi {
    login_replies: Mutex<VecDeque<Result<LoginReply, ClientError>>>,
    signup_replies: Mutex<VecDeque<Result<SignupReply, ClientError>>>,
    seen_logins: Mutex<Vec<LoginRequest>>,
    seen_signups: Mutex<Vec<SignupRequest>>,
}

impl StubAuthApi {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            login_replies: Mutex::new(VecDeque::new()),
            signup_replies: Mutex::new(VecDeque::new()),
            seen_logins: Mutex::new(Vec::new()),
            seen_signups: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn with_login(self: Arc<Self>, reply: Result<LoginReply, ClientError>) -> Arc<Self> {
        self.login_replies.lock().expect("lock").push_back(reply);
        self
    }

    pub(crate) fn with_signup(
        self: Arc<Self>,
        reply: Result<SignupReply, ClientError>,
    ) -> Arc<Self> {
        self.signup_replies.lock().expect("lock").push_back(reply);
        self
    }

    pub(crate) fn seen_logins(&self) -> Vec<LoginRequest> {
        self.seen_logins.lock().expect("lock").clone()
    }

    pub(crate) fn seen_signups(&self) -> Vec<SignupRequest> {
        self.seen_signups.lock().expect("lock").clone()
    }
}

#[async_trait]
impl AuthApi for StubAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, ClientError> {
        self.seen_logins.lock().expect("lock").push(request.clone());
        self.login_replies
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no stubbed reply".to_string())))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupReply, ClientError> {
        self.seen_signups.lock().expect("lock").push(request.clone());
        self.signup_replies
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no stubbed reply".to_string())))
    }
}
