//! Storage key generation.
//!
//! Keys have the form `[folder/]<8 chars>-<6 chars>.<ext>` with both tokens drawn from
//! `A-Z0-9`. Uniqueness relies on entropy alone; existing objects are never consulted.

use std::fmt;

use rand::RngCore;
use thiserror::Error;

/// Alphabet for key tokens.
pub const KEY_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the first key token.
pub const PRIMARY_TOKEN_LEN: usize = 8;

/// Length of the second key token.
pub const SECONDARY_TOKEN_LEN: usize = 6;

/// Rejected folder path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid folder '{folder}': {reason}")]
pub struct InvalidFolder {
    /// Folder as supplied.
    pub folder: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

/// Path-like identifier of a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Generate a fresh key under an already normalized folder.
    ///
    /// Trailing slashes on `folder` are stripped; an empty folder yields a top-level key.
    #[must_use]
    pub fn generate(folder: &str, extension: &str) -> Self {
        let name = format!(
            "{}-{}.{extension}",
            random_token(PRIMARY_TOKEN_LEN),
            random_token(SECONDARY_TOKEN_LEN)
        );
        let folder = folder.trim_end_matches('/');

        if folder.is_empty() {
            Self(name)
        } else {
            Self(format!("{folder}/{name}"))
        }
    }

    /// Key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Random token of `len` characters from [`KEY_ALPHABET`].
///
/// Each byte from the thread-local CSPRNG is reduced modulo 36, so the first
/// `256 % 36` symbols are slightly more likely. That skew is fine for uniqueness;
/// the tokens are not secrets.
#[must_use]
pub fn random_token(len: usize) -> String {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);

    buf.iter()
        .map(|b| char::from(KEY_ALPHABET[usize::from(*b) % KEY_ALPHABET.len()]))
        .collect()
}

/// Normalize a caller-supplied folder.
///
/// Trailing slashes are removed. Folders that are absolute, contain empty segments,
/// or contain `.` / `..` segments are rejected.
pub fn normalize_folder(folder: &str) -> Result<String, InvalidFolder> {
    let trimmed = folder.trim_end_matches('/');
    if trimmed.is_empty() {
        return if folder.is_empty() {
            Ok(String::new())
        } else {
            Err(invalid(folder, "absolute paths are not allowed"))
        };
    }

    if trimmed.starts_with('/') {
        return Err(invalid(folder, "absolute paths are not allowed"));
    }

    for segment in trimmed.split('/') {
        match segment {
            "" => return Err(invalid(folder, "empty path segment")),
            "." | ".." => return Err(invalid(folder, "relative path segment")),
            _ => {}
        }
    }

    Ok(trimmed.to_string())
}

fn invalid(folder: &str, reason: &'static str) -> InvalidFolder {
    InvalidFolder {
        folder: folder.to_string(),
        reason,
    }
}
