//! Upload error types.

use thiserror::Error;

use crate::key::InvalidFolder;
use crate::payload::PayloadError;
use crate::storage::StorageError;

/// Upload pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Payload was empty or not valid base64.
    #[error("{0}")]
    InvalidPayload(#[from] PayloadError),

    /// Folder was rejected.
    #[error("{0}")]
    InvalidFolder(#[from] InvalidFolder),

    /// Object write failed.
    #[error("storage write failed: {0}")]
    StorageWrite(StorageError),

    /// Object was written but no URL could be produced for it.
    #[error("signing URL failed: {0}")]
    StorageSign(StorageError),
}

impl UploadError {
    /// Stable error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "INVALID_PAYLOAD",
            Self::InvalidFolder(_) => "INVALID_FOLDER",
            Self::StorageWrite(_) => "STORAGE_WRITE_ERROR",
            Self::StorageSign(_) => "STORAGE_SIGN_ERROR",
        }
    }

    /// Whether the failure came from the storage backend rather than caller input.
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        matches!(self, Self::StorageWrite(_) | Self::StorageSign(_))
    }
}
