use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};

use crate::error::EncodeError;
use crate::models::{UploadRequest, UploadResult};
use crate::AppState;

/// POST /api/v1/upload
///
/// The body is parsed here rather than by an extractor so that a malformed,
/// unreadable or oversize request yields the same `{success: false, error}`
/// shape as a failed write. The status code mirrors `success`.
pub async fn upload(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<UploadResult>) {
    let result = match body {
        Ok(body) => {
            tracing::info!("Received upload request ({} bytes)", body.len());
            match serde_json::from_slice::<UploadRequest>(&body) {
                Ok(request) => state.upload_gateway.upload(request).await,
                Err(e) => {
                    tracing::warn!("Rejecting unparsable upload body: {}", e);
                    UploadResult::failed(EncodeError::InvalidBody(e.to_string()))
                }
            }
        }
        Err(rejection) => {
            tracing::warn!("Rejecting unreadable upload body: {}", rejection.body_text());
            UploadResult::failed(EncodeError::InvalidBody(rejection.body_text()))
        }
    };

    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(result))
}
