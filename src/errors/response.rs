use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::codes::ErrorCode;
use super::http::HttpError;

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Message safe to show to the end user
    pub message: String,
    /// Request ID for tracing
    pub request_id: String,
    /// Diagnostic payload (statusCode, errorCode, userMessage)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Create error with custom request ID
    pub fn with_request_id(err: &HttpError, request_id: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: err.error_code().clone(),
                message: err.user_message().to_string(),
                request_id: request_id.into(),
                details: Some(err.payload().to_json()),
            },
        }
    }
}

impl From<&HttpError> for ErrorResponse {
    fn from(err: &HttpError) -> Self {
        Self::with_request_id(err, Uuid::new_v4().to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::from(&self);
        log_error(&self, &body.error.request_id);

        (self.status(), Json(body)).into_response()
    }
}

fn log_error(err: &HttpError, request_id: &str) {
    let cause = err
        .inner()
        .map(|e| source_chain(e))
        .unwrap_or_default();

    if err.status().is_server_error() {
        error!(
            request_id = %request_id,
            status = %err.status().as_u16(),
            error_code = %err.error_code(),
            cause = %cause,
            "{}",
            err.message()
        );
    } else {
        warn!(
            request_id = %request_id,
            status = %err.status().as_u16(),
            error_code = %err.error_code(),
            cause = %cause,
            "{}",
            err.message()
        );
    }
}

/// Render an error and everything below it as `outer: inner: ...`
fn source_chain(err: &(dyn StdError + 'static)) -> String {
    let mut chain = err.to_string();
    let mut current = err.source();
    while let Some(next) = current {
        chain.push_str(": ");
        chain.push_str(&next.to_string());
        current = next.source();
    }
    chain
}
