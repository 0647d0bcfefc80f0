use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod remote;
mod services;
mod storage;

use config::Config;
use db::PgCollectionStore;
use remote::ReqwestFetcher;
use services::{CollectionReader, RemoteRelay, UploadGateway};
use shared::observability::{init_logging, LogConfig};
use storage::S3ObjectStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub collection_reader: Arc<CollectionReader>,
    pub remote_relay: Arc<RemoteRelay>,
    pub upload_gateway: Arc<UploadGateway>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;

    init_logging(LogConfig {
        level: config.logging.level,
        format: config.logging.format,
        service_name: "data-gateway".to_string(),
        ..Default::default()
    })?;

    info!("Starting Data Gateway...");

    let collection_store = PgCollectionStore::connect_lazy(&config.collection)?;
    let fetcher = ReqwestFetcher::new()?;
    let object_store = S3ObjectStore::new(&config.storage).await?;

    let state = AppState {
        collection_reader: Arc::new(CollectionReader::new(
            Arc::new(collection_store),
            config.collection.collection_name.clone(),
            config.collection.knowledge_base_collection.clone(),
        )),
        remote_relay: Arc::new(RemoteRelay::new(
            Arc::new(fetcher),
            config.relay.source_url.clone(),
        )),
        upload_gateway: Arc::new(UploadGateway::new(
            Arc::new(object_store),
            config.storage.upload_folder.clone(),
        )),
    };

    info!(
        collection = %config.collection.collection_name,
        relay_source = %state.remote_relay.source_url(),
        upload_folder = %config.storage.upload_folder,
        "Upstream collaborators configured"
    );

    let app = build_router(state, config.server.max_body_bytes);

    let addr = config.bind_address();
    info!("Data Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/collection", get(handlers::collection::get_all))
        .route(
            "/api/v1/collection/entries",
            post(handlers::collection::ingest_entry),
        )
        .route("/api/v1/relay", get(handlers::relay::get_remote))
        .route("/api/v1/upload", post(handlers::upload::upload))
        // Enforced by the body extractors, so handlers see oversize bodies as rejections
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
