//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::{
    BEARER_SCHEME, MSG_AUTHORIZATION_EMPTY, MSG_AUTHORIZATION_INVALID, MSG_PROFILE_ACCESS_DENIED,
};
use crate::errors::AppError;

/// Account identity extracted from a verified access token
#[derive(Clone, Debug)]
pub struct CurrentAccount {
    pub id: i32,
    pub phone_number: String,
}

/// JWT authentication middleware.
///
/// Extracts and validates the bearer token from the Authorization header,
/// then injects the CurrentAccount into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    let token = bearer_token(auth_header)?;

    let claims = state
        .tokens
        .verify(token, state.clock.now())
        .inspect_err(|e| tracing::debug!("Rejected access token: {}", e))?;

    request.extensions_mut().insert(CurrentAccount {
        id: claims.user_id,
        phone_number: claims.phone_number,
    });

    Ok(next.run(request).await)
}

/// Split `"<scheme> <token>"` and insist on the Bearer scheme.
fn bearer_token(header: &str) -> Result<&str, AppError> {
    match header.split_once(' ') {
        Some((BEARER_SCHEME, token)) => Ok(token),
        Some(_) => Err(AppError::unauthorized(MSG_AUTHORIZATION_INVALID)),
        None => Err(AppError::unauthorized(MSG_AUTHORIZATION_EMPTY)),
    }
}

/// Only the token holder may address their own profile.
pub fn require_owner(current: &CurrentAccount, user_id: i32) -> Result<(), AppError> {
    if current.id == user_id {
        Ok(())
    } else {
        Err(AppError::forbidden(MSG_PROFILE_ACCESS_DENIED))
    }
}
