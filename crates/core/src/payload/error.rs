//! Payload error types.

use thiserror::Error;

/// Payload decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Input was empty.
    #[error("empty input")]
    Empty,

    /// Input contains characters outside the base64 alphabet.
    #[error("invalid encoding")]
    InvalidEncoding,

    /// Input uses the base64 alphabet but does not decode exactly.
    #[error("invalid encoding: {0}")]
    Malformed(String),
}
