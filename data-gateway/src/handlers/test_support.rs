//! Router-level helpers shared by handler tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::db::MockCollectionStore;
use crate::remote::MockHttpFetcher;
use crate::services::{CollectionReader, RemoteRelay, UploadGateway};
use crate::storage::MockObjectStore;
use crate::{build_router, AppState};

pub const TEST_SOURCE_URL: &str = "https://docs.example.com/combined.json";

/// Mocks left as `None` fail the test if the handler reaches them
#[derive(Default)]
pub struct TestState {
    pub collection_store: Option<MockCollectionStore>,
    pub fetcher: Option<MockHttpFetcher>,
    pub object_store: Option<MockObjectStore>,
}

impl TestState {
    fn into_app_state(self) -> AppState {
        let collection_store = self.collection_store.unwrap_or_default();
        let fetcher = self.fetcher.unwrap_or_default();
        let object_store = self.object_store.unwrap_or_default();

        AppState {
            collection_reader: Arc::new(CollectionReader::new(
                Arc::new(collection_store),
                "items",
                "knowledge_base",
            )),
            remote_relay: Arc::new(RemoteRelay::new(Arc::new(fetcher), TEST_SOURCE_URL)),
            upload_gateway: Arc::new(UploadGateway::new(Arc::new(object_store), "/data")),
        }
    }
}

/// Issue one request; returns status, content type and the body parsed as
/// JSON (`Value::Null` when empty, `Value::String` when not JSON).
pub async fn call(
    state: TestState,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Option<String>, Value) {
    call_with_body_limit(state, 1024 * 1024, method, uri, body).await
}

/// Like [`call`], with the router built around `max_body_bytes`
pub async fn call_with_body_limit(
    state: TestState,
    max_body_bytes: usize,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Option<String>, Value) {
    let router = build_router(state.into_app_state(), max_body_bytes);

    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, content_type, body)
}
