use crate::api::handlers::{
    auth::{
        types::{LoginRequest, LoginResponse, UserSummary},
        DemoAccounts,
    },
    valid_email,
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{debug, instrument};
use ulid::Ulid;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = LoginResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed credentials", body = LoginResponse),
        (status = 401, description = "Invalid email or password", body = LoginResponse),
    ),
    tag = "auth"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    demo: Extension<Arc<DemoAccounts>>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    let user: LoginRequest = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(LoginResponse::failure("Email and password are required")),
            )
        }
    };

    if user.email.is_empty() || user.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure("Email and password are required")),
        );
    }

    if !valid_email(&user.email) {
        debug!(email = %user.email, "Invalid email format");

        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure("Invalid email format")),
        );
    }

    if demo.matches_login(&user.email, &user.password) {
        debug!(email = %user.email, "Login successful");

        (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: None,
                user: Some(UserSummary {
                    id: "1".to_string(),
                    email: user.email,
                }),
                token: Some(format!("demo-jwt-token-{}", Ulid::new())),
            }),
        )
    } else {
        debug!(email = %user.email, "Unauthorized");

        (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::failure("Invalid email or password")),
        )
    }
}
