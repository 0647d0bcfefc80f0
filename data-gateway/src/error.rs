use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Failures raised by the collection store.
///
/// Serialized as `{"kind": "...", "message": "..."}`, which is also the body
/// returned to callers when a collection read fails.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum StoreError {
    #[error("Collection store connection error: {0}")]
    Connection(String),

    #[error("Collection store timed out: {0}")]
    Timeout(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Invalid collection: {0}")]
    InvalidCollection(String),

    #[error("Query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let message = err.to_string();
        match &err {
            sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(message),
            sqlx::Error::Database(db) => match db.code().as_deref() {
                // insufficient_privilege
                Some("42501") => StoreError::Permission(message),
                // undefined_table
                Some("42P01") => StoreError::InvalidCollection(message),
                _ => StoreError::Query(message),
            },
            _ => StoreError::Query(message),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Failures while relaying the remote document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to reach remote host: {0}")]
    Network(String),

    #[error("Failed to fetch data from GitHub")]
    BadStatus(u16),

    #[error("Malformed JSON document: {0}")]
    MalformedBody(String),
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Failures turning an upload request into bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid upload body: {0}")]
    InvalidBody(String),
}

/// Failures raised by the object store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectStoreError {
    #[error("Object upload failed: {0}")]
    Upload(String),

    #[error("Object store misconfigured: {0}")]
    Configuration(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Store(#[from] ObjectStoreError),
}
