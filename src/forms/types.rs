//! Request and response payloads for the auth API calls made by the form
//! controllers. Passwords travel only in requests and are never logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
}

/// Parsed login response. `ok` mirrors the HTTP status class and is filled in
/// by the client, not the response body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginReply {
    #[serde(skip)]
    pub ok: bool,
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<UserSummary>,
    pub token: Option<String>,
}

/// Parsed signup response, `ok` filled in like [`LoginReply::ok`].
#[derive(Clone, Debug, Deserialize)]
pub struct SignupReply {
    #[serde(skip)]
    pub ok: bool,
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn login_reply_parses_a_success_body() -> Result<()> {
        let reply: LoginReply = serde_json::from_str(
            r#"{"success":true,"user":{"id":"1","email":"test@example.com"},"token":"demo-jwt-token-x"}"#,
        )?;
        assert!(reply.success);
        assert!(!reply.ok, "ok must come from the HTTP status, not the body");
        assert_eq!(reply.user.map(|user| user.email).as_deref(), Some("test@example.com"));
        Ok(())
    }

    #[test]
    fn login_reply_parses_a_rejection_body() -> Result<()> {
        let reply: LoginReply =
            serde_json::from_str(r#"{"success":false,"message":"Invalid email or password"}"#)?;
        assert!(!reply.success);
        assert_eq!(reply.message.as_deref(), Some("Invalid email or password"));
        assert!(reply.user.is_none());
        assert!(reply.token.is_none());
        Ok(())
    }

    #[test]
    fn signup_reply_tolerates_a_bare_body() -> Result<()> {
        let reply: SignupReply = serde_json::from_str("{}")?;
        assert!(!reply.success);
        assert!(reply.message.is_none());
        Ok(())
    }
}
