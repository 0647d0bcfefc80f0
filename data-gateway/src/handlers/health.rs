use axum::{http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};

/// Liveness only; upstream collaborators are not probed
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "data-gateway",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{call, TestState};
    use axum::http::Method;

    #[tokio::test]
    async fn health_reports_service_name() {
        let (status, _, body) = call(TestState::default(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "data-gateway");
        assert!(body["timestamp"].is_string());
    }
}
