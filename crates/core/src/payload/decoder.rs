//! Base64 and data URI decoding.

use std::sync::LazyLock;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;
use regex::Regex;

use super::error::PayloadError;

/// `data:<media-type>;base64,<data>`. The data part may span lines.
static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^data:([a-zA-Z0-9+\-_./]+);base64,(.+)$").expect("data URI pattern is valid")
});

/// Standard alphabet with optional trailing padding.
static BASE64_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]+=*$").expect("base64 pattern is valid"));

/// Standard alphabet, padded input. Padding must complete the final group.
const PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Standard alphabet, unpadded input.
const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Result of decoding an inline payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    /// Raw decoded bytes. May be empty.
    pub bytes: Bytes,
    /// Media type from the data URI prefix, or empty when there was none.
    pub declared_type: String,
}

/// Decode a base64 payload, optionally wrapped in a data URI.
///
/// # Errors
///
/// - `PayloadError::Empty` if the input is empty
/// - `PayloadError::InvalidEncoding` if it contains non-base64 characters
/// - `PayloadError::Malformed` if the groups or padding do not decode exactly
pub fn decode(input: &str) -> Result<DecodedPayload, PayloadError> {
    if input.is_empty() {
        return Err(PayloadError::Empty);
    }

    let (declared_type, encoded) = match DATA_URI.captures(input) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => ("", input),
    };

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    if !BASE64_TEXT.is_match(&compact) {
        return Err(PayloadError::InvalidEncoding);
    }

    // Padding is optional, but when present it must be exactly right.
    let engine = if compact.ends_with('=') { &PADDED } else { &UNPADDED };
    let bytes = engine
        .decode(compact.as_bytes())
        .map_err(|e| PayloadError::Malformed(e.to_string()))?;

    Ok(DecodedPayload {
        bytes: Bytes::from(bytes),
        declared_type: declared_type.to_string(),
    })
}
