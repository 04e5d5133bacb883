//! Upload request and result types.

use crate::key::StorageKey;

/// Input for a single upload.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// Base64 text, optionally wrapped in a data URI.
    pub payload: String,
    /// Folder to store the object under. Empty for the bucket root.
    pub folder: String,
}

impl UploadRequest {
    /// Create a request for `payload` at the bucket root.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            folder: String::new(),
        }
    }

    /// Store under `folder`.
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }
}

/// Outcome of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Key the object was stored under.
    pub key: StorageKey,
    /// Public or signed retrieval URL.
    pub url: String,
    /// Content type written as object metadata.
    pub content_type: String,
    /// Decoded size in bytes.
    pub size: usize,
}
