//! HTTP client for the auth endpoints with consistent timeouts and error
//! handling. Controllers depend on the [`AuthApi`] trait; the reqwest-backed
//! [`RemoteAuthClient`] is the production implementation.

use crate::forms::types::{LoginReply, LoginRequest, SignupReply, SignupRequest};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default request timeout applied to all auth calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// Client-side failure taxonomy. Everything here is recovered at the
/// controller boundary and rendered as a notice.
#[derive(Clone, Debug)]
pub enum ClientError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Config(message) => write!(formatter, "Config error: {message}"),
            ClientError::Network(message) => write!(formatter, "Network error: {message}"),
            ClientError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ClientError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            ClientError::Parse(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Auth endpoints used by the form controllers.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, ClientError>;
    async fn signup(&self, request: &SignupRequest) -> Result<SignupReply, ClientError>;
}

/// JSON client for the demo auth API.
#[derive(Clone, Debug)]
pub struct RemoteAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteAuthClient {
    /// Build a client for the given API base URL.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the base URL does not parse or the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim();
        Url::parse(trimmed)
            .map_err(|err| ClientError::Config(format!("Invalid API base URL: {err}")))?;

        let http = reqwest::Client::builder()
            .user_agent(crate::api::APP_USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| ClientError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a URL from the configured base URL and the provided path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Posts JSON and parses the body for success and error statuses alike.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(bool, T), ClientError> {
        let response = self
            .http
            .post(self.build_url(path))
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        let ok = response.status().is_success();
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_request_error)?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(parsed) => Ok((ok, parsed)),
            Err(_) if !ok => Err(ClientError::Http {
                status,
                message: sanitize_body(String::from_utf8_lossy(&bytes).into_owned()),
            }),
            Err(err) => Err(ClientError::Parse(format!(
                "Failed to decode response: {err}"
            ))),
        }
    }
}

#[async_trait]
impl AuthApi for RemoteAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, ClientError> {
        let (ok, mut reply): (bool, LoginReply) = self.post_json(LOGIN_PATH, request).await?;
        reply.ok = ok;
        Ok(reply)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupReply, ClientError> {
        let (ok, mut reply): (bool, SignupReply) = self.post_json(SIGNUP_PATH, request).await?;
        reply.ok = ok;
        Ok(reply)
    }
}

/// Maps transport errors into user-facing variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ClientError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
