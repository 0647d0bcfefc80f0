use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::FetchError;
use crate::AppState;

/// GET /api/v1/relay
///
/// Both the relayed document and the `{"error": ...}` failure body are sent
/// as `application/json`.
pub async fn get_remote(State(state): State<AppState>) -> Result<Json<Value>, FetchError> {
    tracing::info!("Relaying remote document");

    let payload = state.remote_relay.get_remote().await?;
    Ok(Json(payload))
}
