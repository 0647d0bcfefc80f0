use axum::{extract::State, http::StatusCode, Json};

use crate::error::StoreError;
use crate::models::{KnowledgeEntryRequest, KnowledgeEntryResponse, ReadResult};
use crate::AppState;

/// GET /api/v1/collection
pub async fn get_all(State(state): State<AppState>) -> Result<Json<ReadResult>, StoreError> {
    tracing::info!("Received collection read request");

    let result = state.collection_reader.get_all().await?;

    tracing::info!("Returning {} records", result.items.len());
    Ok(Json(result))
}

/// POST /api/v1/collection/entries
///
/// A body that is not a well-formed entry is rejected by the `Json` extractor
/// with its own 4xx before the store is reached.
pub async fn ingest_entry(
    State(state): State<AppState>,
    Json(payload): Json<KnowledgeEntryRequest>,
) -> Result<(StatusCode, Json<KnowledgeEntryResponse>), StoreError> {
    tracing::info!("Received knowledge-base entry: {}", payload.title);

    let item = state
        .collection_reader
        .ingest_entry(payload.title, payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(KnowledgeEntryResponse { item })))
}
