use crate::domain::error::AgriError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const MODEL_FAILURE: &str = "Failed to get response from AI model";
pub const INTERNAL_FAILURE: &str = "Internal server error";

/// Error body sent to clients: `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<AgriError> for ApiError {
    fn from(err: AgriError) -> Self {
        match err {
            AgriError::Validation(message) => ApiError::bad_request(message),
            e if e.is_gateway() => ApiError::internal(MODEL_FAILURE),
            e => {
                tracing::error!(error = %e, "unhandled request failure");
                ApiError::internal(INTERNAL_FAILURE)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
