//! Image upload endpoint.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use imgdrop_core::storage::ObjectStore;
use imgdrop_core::upload::UploadRequest;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Creates the upload routes.
pub fn routes<S: ObjectStore + 'static>() -> Router<AppState<S>> {
    Router::new().route("/upload", post(upload_image::<S>))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for an upload.
#[derive(Debug, Deserialize)]
pub struct UploadBody {
    /// Base64 image, optionally as a data URI.
    #[serde(rename = "imageBase64", default)]
    pub image_base64: Option<String>,
    /// Folder to store the image under.
    #[serde(default)]
    pub folder: Option<String>,
}

/// Response for a stored upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Always `true`.
    pub ok: bool,
    /// Storage key.
    pub key: String,
    /// Public or signed retrieval URL.
    pub url: String,
    /// Content type the object was stored with.
    pub content_type: String,
    /// Decoded size in bytes.
    pub size: usize,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/upload`
/// Decode an inline image and store it.
async fn upload_image<S: ObjectStore + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<UploadBody>, JsonRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    // A body sent without a JSON content type is treated as carrying no fields.
    let Json(body) = body.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => ApiError::MissingPayload,
        other => ApiError::InvalidBody(other.body_text()),
    })?;

    let payload = body
        .image_base64
        .filter(|p| !p.is_empty())
        .ok_or(ApiError::MissingPayload)?;

    let request = UploadRequest::new(payload).with_folder(body.folder.unwrap_or_default());
    let result = state.uploads.upload(request).await?;

    Ok(Json(UploadResponse {
        ok: true,
        key: result.key.into_string(),
        url: result.url,
        content_type: result.content_type,
        size: result.size,
    }))
}
