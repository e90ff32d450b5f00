//! Request/response types for the demo auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LoginResponse {
    /// Rejection body shared by the 400/401 arms.
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            user: None,
            token: None,
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

impl SignupResponse {
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn login_response_omits_empty_fields() -> Result<()> {
        let response = LoginResponse::failure("Invalid email or password");
        let value = serde_json::to_value(&response)?;
        assert_eq!(value.get("success"), Some(&serde_json::json!(false)));
        assert!(value.get("user").is_none());
        assert!(value.get("token").is_none());
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .context("missing message")?;
        assert_eq!(message, "Invalid email or password");
        Ok(())
    }

    #[test]
    fn login_response_success_carries_user_and_token() -> Result<()> {
        let response = LoginResponse {
            success: true,
            message: None,
            user: Some(UserSummary {
                id: "1".to_string(),
                email: "test@example.com".to_string(),
            }),
            token: Some("demo-jwt-token-01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string()),
        };
        let value = serde_json::to_value(&response)?;
        let email = value
            .pointer("/user/email")
            .and_then(serde_json::Value::as_str)
            .context("missing user email")?;
        assert_eq!(email, "test@example.com");
        assert!(value.get("message").is_none());
        Ok(())
    }

    #[test]
    fn signup_request_round_trips() -> Result<()> {
        let request = SignupRequest {
            email: "alice@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        let value = serde_json::to_value(&request)?;
        let decoded: SignupRequest = serde_json::from_value(value)?;
        assert_eq!(decoded.email, "alice@example.com");
        assert_eq!(decoded.password, "hunter22");
        Ok(())
    }
}
