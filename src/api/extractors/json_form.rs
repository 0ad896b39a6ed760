//! JSON body extractor with the service's malformed-request rejection.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::config::MSG_MALFORMED_REQUEST;
use crate::errors::AppError;

/// JSON extractor that rejects undecodable bodies with a `Validation` error.
///
/// Field rules are left to the form's own `validate`, which the service runs.
pub struct JsonForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected request body: {}", e.body_text());
            AppError::validation(MSG_MALFORMED_REQUEST)
        })?;

        Ok(JsonForm(value))
    }
}
