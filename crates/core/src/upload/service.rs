//! Upload service implementation.

use tracing::{debug, info, warn};

use super::error::UploadError;
use super::types::{UploadRequest, UploadResult};
use crate::content_type;
use crate::key::{StorageKey, normalize_folder};
use crate::payload;
use crate::storage::{ObjectStore, StorageGateway};

/// Runs the upload pipeline for one request at a time.
///
/// The service holds no per-request state and can be shared across tasks.
#[derive(Debug)]
pub struct UploadService<S> {
    gateway: StorageGateway<S>,
}

impl<S: ObjectStore> UploadService<S> {
    /// Create a new upload service.
    #[must_use]
    pub fn new(gateway: StorageGateway<S>) -> Self {
        Self { gateway }
    }

    /// Decode, store, and resolve a URL for one payload.
    ///
    /// If the object is written but URL resolution fails, the object is left in
    /// place and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The payload is empty or not valid base64
    /// - The folder is absolute or contains `.`, `..`, or empty segments
    /// - The storage write fails
    /// - Signing the retrieval URL fails
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadResult, UploadError> {
        let decoded = payload::decode(&request.payload)?;
        let resolved = content_type::resolve(&decoded.declared_type);
        let folder = normalize_folder(&request.folder)?;
        let key = StorageKey::generate(&folder, resolved.extension);
        let size = decoded.bytes.len();

        debug!(
            key = %key,
            size,
            content_type = %resolved.content_type,
            "Writing object"
        );

        self.gateway
            .put(&key, decoded.bytes, &resolved.content_type)
            .await
            .map_err(UploadError::StorageWrite)?;

        let url = match self.gateway.resolve_url(&key).await {
            Ok(url) => url,
            Err(e) => {
                warn!(key = %key, error = %e, "Object stored but URL resolution failed");
                return Err(UploadError::StorageSign(e));
            }
        };

        info!(
            key = %key,
            size,
            content_type = %resolved.content_type,
            "Upload stored"
        );

        Ok(UploadResult {
            key,
            url,
            content_type: resolved.content_type,
            size,
        })
    }

    /// Storage gateway used by this service.
    #[must_use]
    pub fn gateway(&self) -> &StorageGateway<S> {
        &self.gateway
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PayloadError;
    use crate::storage::{StorageConfig, StorageError};
    use bytes::Bytes;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// A stored object as seen by the mock.
    #[derive(Debug, Clone)]
    struct StoredObject {
        key: String,
        body: Bytes,
        content_type: String,
    }

    /// Mock store for testing.
    #[derive(Default)]
    struct MockStore {
        objects: Mutex<Vec<StoredObject>>,
        puts: AtomicUsize,
        presigns: AtomicUsize,
        put_error: Option<StorageError>,
        presign_error: Option<StorageError>,
    }

    impl MockStore {
        fn failing_put(err: StorageError) -> Self {
            Self {
                put_error: Some(err),
                ..Self::default()
            }
        }

        fn failing_presign(err: StorageError) -> Self {
            Self {
                presign_error: Some(err),
                ..Self::default()
            }
        }
    }

    impl ObjectStore for MockStore {
        async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.put_error {
                return Err(err.clone());
            }
            self.objects.lock().unwrap().push(StoredObject {
                key: key.to_string(),
                body,
                content_type: content_type.to_string(),
            });
            Ok(())
        }

        async fn presign_read(&self, key: &str, _ttl: Duration) -> Result<String, StorageError> {
            self.presigns.fetch_add(1, Ordering::SeqCst);
            match &self.presign_error {
                Some(err) => Err(err.clone()),
                None => Ok(format!("https://signed.example.com/{key}?X-Amz-Signature=abc")),
            }
        }
    }

    fn service(store: MockStore, config: StorageConfig) -> UploadService<MockStore> {
        UploadService::new(StorageGateway::new(store, config))
    }

    fn public_config() -> StorageConfig {
        StorageConfig::default().with_public_base_url("https://cdn.example.com")
    }

    fn puts(service: &UploadService<MockStore>) -> usize {
        service.gateway().store().puts.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn test_upload_png_data_uri() {
        let service = service(MockStore::default(), public_config());

        let result = service
            .upload(UploadRequest::new("data:image/png;base64,iVBORw0KGgo="))
            .await
            .expect("upload should succeed");

        assert!(result.key.as_str().ends_with(".png"));
        assert!(!result.key.as_str().contains('/'));
        assert_eq!(result.size, 8);
        assert_eq!(result.content_type, "image/png");
        assert_eq!(result.url, format!("https://cdn.example.com/{}", result.key));

        let objects = service.gateway().store().objects.lock().unwrap().clone();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].key, result.key.as_str());
        assert_eq!(objects[0].body.len(), 8);
        assert_eq!(objects[0].content_type, "image/png");
    }

    #[tokio::test]
    async fn test_upload_into_folder() {
        let service = service(MockStore::default(), public_config());

        let result = service
            .upload(UploadRequest::new("data:image/jpeg;base64,/9j/4AAQ").with_folder("users/42/"))
            .await
            .expect("upload should succeed");

        assert!(result.key.as_str().starts_with("users/42/"));
        assert!(result.key.as_str().ends_with(".jpeg"));
        assert_eq!(result.content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_plain_base64_stored_as_octet_stream() {
        let service = service(MockStore::default(), public_config());

        let result = service
            .upload(UploadRequest::new("iVBORw0KGgo="))
            .await
            .expect("upload should succeed");

        assert_eq!(result.content_type, "application/octet-stream");
        assert!(result.key.as_str().ends_with(".png"));
    }

    #[tokio::test]
    async fn test_declared_type_kept_but_extension_clamped() {
        let service = service(MockStore::default(), public_config());

        let result = service
            .upload(UploadRequest::new("data:text/html;base64,PGgxPmhpPC9oMT4="))
            .await
            .expect("upload should succeed");

        assert_eq!(result.content_type, "text/html");
        assert!(result.key.as_str().ends_with(".png"));
        let objects = service.gateway().store().objects.lock().unwrap().clone();
        assert_eq!(objects[0].content_type, "text/html");
    }

    #[tokio::test]
    async fn test_signed_url_without_public_base() {
        let service = service(MockStore::default(), StorageConfig::default());

        let result = service
            .upload(UploadRequest::new("data:image/webp;base64,UklGRg=="))
            .await
            .expect("upload should succeed");

        assert!(result.url.starts_with("https://signed.example.com/"));
        assert_eq!(service.gateway().store().presigns.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_payload_never_writes() {
        let service = service(MockStore::default(), public_config());

        let err = service
            .upload(UploadRequest::new("not-base64-@@@"))
            .await
            .unwrap_err();

        assert_eq!(err, UploadError::InvalidPayload(PayloadError::InvalidEncoding));
        assert_eq!(puts(&service), 0);
    }

    #[tokio::test]
    async fn test_empty_payload_never_writes() {
        let service = service(MockStore::default(), public_config());

        let err = service.upload(UploadRequest::new("")).await.unwrap_err();

        assert_eq!(err, UploadError::InvalidPayload(PayloadError::Empty));
        assert_eq!(puts(&service), 0);
    }

    #[tokio::test]
    async fn test_traversal_folder_never_writes() {
        let service = service(MockStore::default(), public_config());

        let err = service
            .upload(UploadRequest::new("iVBORw0KGgo=").with_folder("../other-tenant"))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::InvalidFolder(_)));
        assert_eq!(puts(&service), 0);
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_backend_message() {
        let service = service(
            MockStore::failing_put(StorageError::operation("NoSuchBucket: bucket does not exist")),
            StorageConfig::default(),
        );

        let err = service
            .upload(UploadRequest::new("iVBORw0KGgo="))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::StorageWrite(_)));
        assert!(err.to_string().contains("NoSuchBucket"));
        assert_eq!(puts(&service), 1);
        assert_eq!(service.gateway().store().presigns.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sign_failure_leaves_object_in_place() {
        let service = service(
            MockStore::failing_presign(StorageError::PresignNotSupported),
            StorageConfig::default(),
        );

        let err = service
            .upload(UploadRequest::new("iVBORw0KGgo="))
            .await
            .unwrap_err();

        assert_eq!(err, UploadError::StorageSign(StorageError::PresignNotSupported));
        assert_eq!(service.gateway().store().objects.lock().unwrap().len(), 1);
    }
}
