//! Storage gateway: object writes and URL resolution.

use bytes::Bytes;

use super::config::StorageConfig;
use super::error::StorageError;
use super::store::ObjectStore;
use crate::key::StorageKey;

/// Writes objects and resolves their retrieval URLs.
#[derive(Debug)]
pub struct StorageGateway<S> {
    store: S,
    config: StorageConfig,
}

impl<S: ObjectStore> StorageGateway<S> {
    /// Create a gateway over `store`.
    #[must_use]
    pub fn new(store: S, config: StorageConfig) -> Self {
        Self { store, config }
    }

    /// Write an object. This is the only mutating call against the store.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the write fails.
    pub async fn put(
        &self,
        key: &StorageKey,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.store.put(key.as_str(), body, content_type).await
    }

    /// Resolve the retrieval URL for a stored object.
    ///
    /// With a public base URL this is a pure string join. Otherwise a signed URL
    /// valid for the configured TTL is requested from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if presigning fails.
    pub async fn resolve_url(&self, key: &StorageKey) -> Result<String, StorageError> {
        match self.config.public_base_url.as_deref() {
            Some(base) => Ok(join_public_url(base, key.as_str())),
            None => {
                self.store
                    .presign_read(key.as_str(), self.config.presign_ttl())
                    .await
            }
        }
    }

    /// Underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Join a public base URL and a key.
///
/// Trailing slashes on the base are dropped; each key segment is percent-encoded on
/// its own so `/` separators survive. `!'()*` stay literal, matching
/// `encodeURIComponent`.
#[must_use]
pub fn join_public_url(base: &str, key: &str) -> String {
    let base = base.trim_end_matches('/');
    let encoded = key
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/");

    format!("{base}/{encoded}")
}

/// Unreserved marks that `urlencoding` escapes but URI components keep.
const KEPT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

fn encode_segment(segment: &str) -> String {
    let encoded = urlencoding::encode(segment);
    if !encoded.contains('%') {
        return encoded.into_owned();
    }
    KEPT_MARKS
        .iter()
        .fold(encoded.into_owned(), |acc, &(escaped, mark)| acc.replace(escaped, mark))
}
