//! API route definitions.

use axum::Router;
use imgdrop_core::storage::ObjectStore;

use crate::AppState;

pub mod health;
pub mod upload;

/// Creates the API router with all routes.
pub fn api_routes<S: ObjectStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .merge(health::routes())
        .merge(upload::routes())
}
