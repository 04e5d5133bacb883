//! Upload pipeline for imgdrop.
//!
//! This crate turns an inline-encoded image into a stored object and a retrievable URL.
//! It has no web framework dependencies; the HTTP surface lives in `imgdrop-api`.
//!
//! # Modules
//!
//! - `payload` - Base64 / data URI decoding
//! - `content_type` - Content type and file extension resolution
//! - `key` - Storage key generation
//! - `storage` - Object store capability and URL resolution
//! - `upload` - Per-request orchestration

pub mod content_type;
pub mod key;
pub mod payload;
pub mod storage;
pub mod upload;
