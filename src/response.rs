use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned by every operation: `{code, message, body}`.
///
/// `code` mirrors the HTTP status the envelope is sent with.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub body: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, body: T) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            body,
        }
    }

    pub fn success(message: impl Into<String>, body: T) -> Self {
        Self::new(StatusCode::OK, message, body)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ApiResponse<serde_json::Value> {
    /// Envelope with an empty object body.
    pub fn empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message, empty_body())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Empty object body for operations that report nothing back.
pub fn empty_body() -> serde_json::Value {
    serde_json::json!({})
}
