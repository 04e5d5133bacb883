//! Upload orchestration.
//!
//! One request runs `decode → resolve type → assign key → store → resolve URL` and
//! either yields a complete [`UploadResult`] or an [`UploadError`]. Nothing is shared
//! between requests and no step is retried.

mod error;
mod service;
mod types;

pub use error::UploadError;
pub use service::UploadService;
pub use types::{UploadRequest, UploadResult};
