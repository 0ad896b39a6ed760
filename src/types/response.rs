use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::config::MSG_SUCCESS;

/// Success envelope shared by every endpoint: `{code, message, data}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: MSG_SUCCESS.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with `"data": null`.
    pub fn empty() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: MSG_SUCCESS.to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
