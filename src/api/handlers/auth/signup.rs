use crate::api::handlers::{
    auth::{
        types::{SignupRequest, SignupResponse},
        DemoAccounts,
    },
    valid_email,
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Minimum password length accepted by signup.
pub const MIN_PASSWORD_CHARS: usize = 6;

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses (
        (status = 200, description = "Account created", body = SignupResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed fields", body = SignupResponse),
        (status = 409, description = "Email already exists", body = SignupResponse),
    ),
    tag = "auth"
)]
// axum handler for signup
#[instrument(skip_all)]
pub async fn signup(
    demo: Extension<Arc<DemoAccounts>>,
    payload: Option<Json<SignupRequest>>,
) -> impl IntoResponse {
    let user: SignupRequest = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SignupResponse::failure("Email and password are required")),
            )
        }
    };

    if user.email.is_empty() || user.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SignupResponse::failure("Email and password are required")),
        );
    }

    if !valid_email(&user.email) {
        debug!(email = %user.email, "Invalid email format");

        return (
            StatusCode::BAD_REQUEST,
            Json(SignupResponse::failure("Invalid email format")),
        );
    }

    if user.password.chars().count() < MIN_PASSWORD_CHARS {
        return (
            StatusCode::BAD_REQUEST,
            Json(SignupResponse::failure(
                "Password must be at least 6 characters",
            )),
        );
    }

    if demo.is_taken(&user.email) {
        debug!(email = %user.email, "Email already exists");

        return (
            StatusCode::CONFLICT,
            Json(SignupResponse::failure("Email already exists")),
        );
    }

    debug!(email = %user.email, "Account created");

    (
        StatusCode::OK,
        Json(SignupResponse {
            success: true,
            message: "Account created successfully".to_string(),
        }),
    )
}
