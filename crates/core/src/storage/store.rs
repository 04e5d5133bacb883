//! Object store capability and its OpenDAL implementation.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use imgdrop_shared::StorageSettings;
use opendal::{Operator, services};

use super::error::StorageError;

/// Minimal object store capability used by the upload pipeline.
///
/// Implemented by [`OpendalStore`] for real backends and by in-process doubles in tests.
pub trait ObjectStore: Send + Sync {
    /// Write `body` under `key` with the given content type.
    ///
    /// A failed write must not leave a partial object visible to readers.
    fn put(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Produce a time-limited signed GET URL for `key`.
    fn presign_read(
        &self,
        key: &str,
        ttl: Duration,
    ) -> impl Future<Output = Result<String, StorageError>> + Send;
}

/// [`ObjectStore`] backed by an OpenDAL operator.
#[derive(Debug, Clone)]
pub struct OpendalStore {
    operator: Operator,
}

impl OpendalStore {
    /// Create an S3-compatible store from application settings.
    ///
    /// # Errors
    ///
    /// Returns an error if no endpoint can be derived or the operator cannot be built.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, StorageError> {
        let endpoint = settings
            .endpoint_url()
            .ok_or_else(|| StorageError::configuration("no endpoint or account id configured"))?;

        let builder = services::S3::default()
            .endpoint(&endpoint)
            .bucket(&settings.bucket)
            .access_key_id(&settings.access_key_id)
            .secret_access_key(&settings.secret_access_key)
            .region(&settings.region);

        let operator = Operator::new(builder)
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        Ok(Self { operator })
    }

    /// Create an in-process store. Objects live as long as the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator cannot be built.
    pub fn memory() -> Result<Self, StorageError> {
        let operator = Operator::new(services::Memory::default())
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        Ok(Self { operator })
    }

    /// Underlying operator.
    #[must_use]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }
}

impl ObjectStore for OpendalStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
        let write = self.operator.write_with(key, body);
        let write = if self
            .operator
            .info()
            .full_capability()
            .write_with_content_type
        {
            write.content_type(content_type)
        } else {
            write
        };

        write
            .await
            .map(|_| ())
            .map_err(|e| StorageError::operation(e.to_string()))
    }

    async fn presign_read(&self, key: &str, ttl: Duration) -> Result<String, StorageError> {
        let presigned = self
            .operator
            .presign_read(key, ttl)
            .await
            .map_err(StorageError::from)?;

        Ok(presigned.uri().to_string())
    }
}
