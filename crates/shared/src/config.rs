//! Application configuration management.

use config::ConfigError;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Object storage configuration.
    pub storage: StorageSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on request body size in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_body_limit() -> usize {
    25 * 1024 * 1024
}

/// S3-compatible object store settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Access key ID.
    #[serde(default)]
    pub access_key_id: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_access_key: String,
    /// Cloudflare account ID, used to derive the R2 endpoint.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Explicit endpoint URL. Takes precedence over `account_id`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Signing region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Public base URL objects are served from. Signed URLs are issued when unset.
    #[serde(default)]
    pub public_base_url: Option<String>,
    /// Lifetime of signed retrieval URLs in seconds.
    #[serde(default = "default_presign_ttl")]
    pub presign_ttl_secs: u64,
}

fn default_region() -> String {
    "auto".to_string()
}

fn default_presign_ttl() -> u64 {
    3600 // 1 hour
}

impl StorageSettings {
    /// Endpoint URL for the store.
    ///
    /// Returns `None` when neither an endpoint nor an account ID is configured.
    #[must_use]
    pub fn endpoint_url(&self) -> Option<String> {
        if let Some(endpoint) = non_blank(self.endpoint.as_deref()) {
            return Some(endpoint.trim_end_matches('/').to_string());
        }
        non_blank(self.account_id.as_deref())
            .map(|account| format!("https://{account}.r2.cloudflarestorage.com"))
    }

    /// Public base URL, ignoring a blank value.
    #[must_use]
    pub fn public_base_url(&self) -> Option<&str> {
        non_blank(self.public_base_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Loads configuration from environment and config files, then validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or required storage
    /// settings are missing.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("IMGDROP").separator("__"))
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Checks that every setting the storage backend needs is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the missing settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let storage = &self.storage;
        let mut missing = Vec::new();

        if storage.access_key_id.trim().is_empty() {
            missing.push("storage.access_key_id");
        }
        if storage.secret_access_key.trim().is_empty() {
            missing.push("storage.secret_access_key");
        }
        if storage.bucket.trim().is_empty() {
            missing.push("storage.bucket");
        }
        if storage.endpoint_url().is_none() {
            missing.push("storage.account_id or storage.endpoint");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(format!(
                "missing required storage settings: {}",
                missing.join(", ")
            )))
        }
    }
}
