//! Registration and token handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};
use crate::services::TokenResponse;
use crate::types::CreatedEmpty;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Token request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/generate_token", post(generate_token))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Validation error"),
        (status = 500, description = "User could not be stored")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<CreatedEmpty> {
    let user = state
        .auth_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    tracing::debug!(user = ?UserResponse::from(user), "Registration accepted");
    Ok(CreatedEmpty)
}

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/users/generate_token",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn generate_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await
        .map_err(AppError::conceal_not_found)?;

    Ok(Json(token))
}
