//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - `POST /upload` and `GET /health`
//! - Error to JSON response mapping
//! - Body size limit, CORS, request tracing, and panic recovery layers

pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use imgdrop_core::storage::ObjectStore;
use imgdrop_core::upload::UploadService;
use imgdrop_shared::ServerConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
pub struct AppState<S> {
    /// Upload pipeline.
    pub uploads: Arc<UploadService<S>>,
    /// Upper bound on request body size in bytes.
    pub body_limit_bytes: usize,
}

impl<S> AppState<S> {
    /// Create application state from the upload service and server settings.
    #[must_use]
    pub fn new(uploads: UploadService<S>, server: &ServerConfig) -> Self {
        Self {
            uploads: Arc::new(uploads),
            body_limit_bytes: server.body_limit_bytes,
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            uploads: Arc::clone(&self.uploads),
            body_limit_bytes: self.body_limit_bytes,
        }
    }
}

/// Creates the main application router.
pub fn create_router<S: ObjectStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(DefaultBodyLimit::max(state.body_limit_bytes))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin may call the gateway; preflight results are cached for a day.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(86_400))
}
