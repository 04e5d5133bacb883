//! API error responses.
//!
//! Every failure is reported as `400 {"ok": false, "error": "<message>"}`, including
//! storage backend failures. The body is the only place that tells them apart.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use imgdrop_core::upload::UploadError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Message returned when a handler fails unexpectedly.
pub const GENERIC_FAILURE: &str = "Upload failed";

/// Errors surfaced by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request carried no payload.
    #[error("Missing 'imageBase64'")]
    MissingPayload,

    /// Request body could not be read as the expected JSON.
    #[error("{0}")]
    InvalidBody(String),

    /// Upload pipeline failed.
    #[error("{0}")]
    Upload(#[from] UploadError),
}

impl ApiError {
    /// Returns the error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPayload => "MISSING_PAYLOAD",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Upload(e) => e.error_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upload(e) if e.is_backend() => {
                error!(code = self.error_code(), error = %self, "Upload failed");
            }
            _ => warn!(code = self.error_code(), error = %self, "Upload rejected"),
        }

        failure_response(&self.to_string())
    }
}

/// `400 {"ok": false, "error": message}`.
pub fn failure_response(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "ok": false, "error": message })),
    )
        .into_response()
}

/// Maps a handler panic to the generic failure response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Handler panicked");

    failure_response(GENERIC_FAILURE)
}
