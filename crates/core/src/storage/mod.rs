//! Object storage for uploaded images using Apache OpenDAL.
//!
//! The pipeline only needs two capabilities from a store, captured by [`ObjectStore`]:
//! writing one object and presigning a read for it. [`OpendalStore`] provides both
//! against any S3-compatible backend (Cloudflare R2, AWS S3, MinIO).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      StorageGateway                          │
//! │   put(key, bytes, type)        resolve_url(key)              │
//! │                                 ├─ public base URL → join    │
//! │                                 └─ otherwise → presign_read  │
//! ├──────────────────────────────────────────────────────────────┤
//! │                ObjectStore (OpendalStore)                    │
//! │ op.write_with(key, data)      │ op.presign_read(key, ttl)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod gateway;
mod store;

pub use config::StorageConfig;
pub use error::StorageError;
pub use gateway::{StorageGateway, join_public_url};
pub use store::{ObjectStore, OpendalStore};
