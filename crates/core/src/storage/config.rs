//! Storage gateway configuration.

use std::time::Duration;

use imgdrop_shared::StorageSettings;

/// URL resolution settings for the storage gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Public base URL objects are served from. Signed URLs are issued when unset.
    pub public_base_url: Option<String>,
    /// Signed retrieval URL TTL in seconds (default: 3600 = 1 hour).
    pub presign_ttl_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_base_url: None,
            presign_ttl_secs: Self::DEFAULT_PRESIGN_TTL,
        }
    }
}

impl StorageConfig {
    /// Default signed URL TTL: 1 hour.
    pub const DEFAULT_PRESIGN_TTL: u64 = 3600;

    /// Build from application storage settings.
    #[must_use]
    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self {
            public_base_url: settings.public_base_url().map(String::from),
            presign_ttl_secs: settings.presign_ttl_secs,
        }
    }

    /// Serve objects from a public base URL instead of signing.
    #[must_use]
    pub fn with_public_base_url(mut self, base: impl Into<String>) -> Self {
        self.public_base_url = Some(base.into());
        self
    }

    /// Signed URL TTL as a duration.
    #[must_use]
    pub fn presign_ttl(&self) -> Duration {
        Duration::from_secs(self.presign_ttl_secs)
    }
}
