//! Shared configuration for the imgdrop upload gateway.
//!
//! Configuration is read once at startup and handed to the storage gateway and the
//! HTTP layer explicitly. Nothing in the workspace reads the environment after that.

pub mod config;

pub use config::{AppConfig, ServerConfig, StorageSettings};
