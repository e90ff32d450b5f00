use crate::api::handlers::{auth, health};
use utoipa::OpenApi;

/// `OpenAPI` document for the demo auth endpoints.
///
/// Add new endpoints here via `paths(...)` so they show up in the generated
/// spec served at `/api-docs/openapi.json` and in the Swagger UI.
#[derive(OpenApi)]
#[openapi(
    paths(health::health, auth::login::login, auth::signup::signup),
    components(schemas(
        auth::types::LoginRequest,
        auth::types::LoginResponse,
        auth::types::SignupRequest,
        auth::types::SignupResponse,
        auth::types::UserSummary,
    )),
    tags(
        (name = "auth", description = "Demo login and signup"),
        (name = "health", description = "Service health and build info"),
    )
)]
pub struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
