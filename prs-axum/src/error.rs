//! The error body shared by every failing endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prs_core::models::format_datetime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// When the error was produced (UTC, ISO-8601 local date-time)
    pub timestamp: String,
    /// HTTP status code
    pub status: u16,
    /// Human readable description of the problem
    pub message: String,
    /// Path of the failing request
    pub path: String,
}

/// A failed request, rendered as an [`ErrorResponse`].
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
    path: &'static str,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>, path: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            path,
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>, path: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, path)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let now = time::OffsetDateTime::now_utc();
        let timestamp =
            format_datetime(time::PrimitiveDateTime::new(now.date(), now.time())).unwrap_or_default();

        let body = ErrorResponse {
            timestamp,
            status: self.status.as_u16(),
            message: self.message,
            path: self.path.to_owned(),
        };
        (self.status, Json(body)).into_response()
    }
}

// Responses are documented per route with `response_with`.
impl aide::OperationOutput for ApiError {
    type Inner = ErrorResponse;
}
