//! Profile handlers. Mounted behind the JWT middleware.

use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Router,
};

use crate::api::extractors::JsonForm;
use crate::api::middleware::{require_owner, CurrentAccount};
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::{parse_user_id, ProfileResponse, UpdateProfileRequest};
use crate::types::ApiResponse;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile/:id", get(get_profile).put(update_profile))
}

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/profile/{id}",
    tag = "Profile",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 400, description = "Malformed account ID"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 403, description = "Account does not exist or belongs to someone else")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProfileResponse>> {
    let user_id = parse_user_id(&id)?;
    require_owner(&current, user_id)?;

    let profile = state.accounts.get_profile(user_id).await?;
    Ok(ApiResponse::success(profile))
}

/// Overwrite the caller's phone number and full name
#[utoipa::path(
    put,
    path = "/profile/{id}",
    tag = "Profile",
    params(("id" = i32, Path, description = "Account ID")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Malformed request or validation error"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 403, description = "Account does not exist or belongs to someone else"),
        (status = 409, description = "Phone number already exists")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
    Path(id): Path<String>,
    JsonForm(payload): JsonForm<UpdateProfileRequest>,
) -> AppResult<ApiResponse<()>> {
    let user_id = parse_user_id(&id)?;
    require_owner(&current, user_id)?;

    state.accounts.update_profile(user_id, payload).await?;
    Ok(ApiResponse::empty())
}
