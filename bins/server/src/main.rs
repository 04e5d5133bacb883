//! imgdrop upload gateway
//!
//! Main entry point for the upload service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgdrop_api::{AppState, create_router};
use imgdrop_core::storage::{OpendalStore, StorageConfig, StorageGateway};
use imgdrop_core::upload::UploadService;
use imgdrop_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgdrop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing storage credentials stop the process here
    let config = AppConfig::load()
        .inspect_err(|e| error!(error = %e, "Invalid configuration"))
        .context("failed to load configuration")?;

    // Create storage gateway
    let store = OpendalStore::from_settings(&config.storage)
        .context("failed to initialize object store")?;
    let gateway = StorageGateway::new(store, StorageConfig::from_settings(&config.storage));
    info!(
        bucket = %config.storage.bucket,
        public_urls = config.storage.public_base_url().is_some(),
        "Object store configured"
    );

    // Create application state
    let state = AppState::new(UploadService::new(gateway), &config.server);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
