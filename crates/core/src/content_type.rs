//! Content type and file extension resolution.
//!
//! The declared media type is caller input. It is passed through as object metadata,
//! but the extension written into the storage key is always one of
//! [`ALLOWED_EXTENSIONS`].

/// Content type used when the payload declares none.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Extensions a stored object may carry.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Extension used when the mapped extension is unknown or not allowed.
pub const DEFAULT_EXTENSION: &str = "png";

/// Resolved content type and storage extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Content type written as object metadata.
    pub content_type: String,
    /// File extension for the storage key.
    pub extension: &'static str,
}

/// Resolve the content type and extension for a declared media type.
///
/// An empty declaration falls back to [`FALLBACK_CONTENT_TYPE`]. The returned content
/// type is the declaration as given; only the extension is clamped.
#[must_use]
pub fn resolve(declared_type: &str) -> ResolvedType {
    let content_type = if declared_type.is_empty() {
        FALLBACK_CONTENT_TYPE
    } else {
        declared_type
    };

    let extension = mapped_extension(content_type)
        .and_then(|ext| ALLOWED_EXTENSIONS.iter().copied().find(|allowed| *allowed == ext))
        .unwrap_or(DEFAULT_EXTENSION);

    ResolvedType {
        content_type: content_type.to_string(),
        extension,
    }
}

/// Canonical extension for a content type.
///
/// Parameters and case are ignored. When the type has several registered
/// extensions, the one equal to the subtype wins (`image/jpeg` -> `jpeg`).
fn mapped_extension(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let (_, subtype) = essence.split_once('/')?;

    let extensions = mime_guess::get_mime_extensions_str(&essence)?;
    extensions
        .iter()
        .copied()
        .find(|ext| *ext == subtype)
        .or_else(|| extensions.first().copied())
}
