//! Registration and login handlers.

use axum::{extract::State, routing::post, Router};

use crate::api::extractors::JsonForm;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::types::ApiResponse;

/// Create public account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/registration", post(register))
        .route("/login", post(login))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/registration",
    tag = "Accounts",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account registered; data holds the new user_id", body = RegisterResponse),
        (status = 400, description = "Malformed request or validation error"),
        (status = 409, description = "Phone number already exists"),
        (status = 422, description = "Internal server error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonForm(payload): JsonForm<RegisterRequest>,
) -> AppResult<ApiResponse<RegisterResponse>> {
    let registered = state.accounts.register(payload).await?;
    Ok(ApiResponse::success(registered))
}

/// Login and get an access token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; data holds the token and its expiry", body = LoginResponse),
        (status = 400, description = "Missing fields or unregistered phone number"),
        (status = 401, description = "Wrong password"),
        (status = 422, description = "Internal server error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonForm(payload): JsonForm<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let session = state.accounts.login(payload).await?;
    Ok(ApiResponse::success(session))
}
