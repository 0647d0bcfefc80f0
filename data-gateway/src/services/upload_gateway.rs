use std::sync::Arc;

use shared::observability::{upstream_span, UpstreamCall, UpstreamKind};
use tracing::Instrument;

use crate::error::{EncodeError, UploadError};
use crate::models::{UploadRequest, UploadResult};
use crate::storage::ObjectStore;

/// MIME type declared for every stored payload
pub const UPLOAD_MIME_TYPE: &str = "application/json";

/// Writes named text payloads into the object store
pub struct UploadGateway {
    store: Arc<dyn ObjectStore>,
    folder: String,
}

impl UploadGateway {
    pub fn new(store: Arc<dyn ObjectStore>, folder: impl Into<String>) -> Self {
        Self {
            store,
            folder: folder.into(),
        }
    }

    /// Non-raising upload: every failure is folded into the result
    pub async fn upload(&self, request: UploadRequest) -> UploadResult {
        match self.try_upload(request).await {
            Ok(file_url) => UploadResult::stored(file_url),
            Err(e) => {
                tracing::error!("Upload failed: {}", e);
                UploadResult::failed(e)
            }
        }
    }

    /// Encode the payload and write it; returns the store-assigned URL
    pub async fn try_upload(&self, request: UploadRequest) -> Result<String, UploadError> {
        let (file_name, bytes) = encode(request)?;

        tracing::info!(
            file_name = %file_name,
            size = bytes.len(),
            folder = %self.folder,
            "Uploading payload"
        );

        let call = UpstreamCall::start(UpstreamKind::ObjectStore, &file_name);
        let outcome = self
            .store
            .put(&self.folder, bytes, &file_name, UPLOAD_MIME_TYPE)
            .instrument(upstream_span(UpstreamKind::ObjectStore, &file_name))
            .await;

        match outcome {
            Ok(file_url) => {
                call.succeeded();
                Ok(file_url)
            }
            Err(e) => {
                call.failed(&e);
                Err(e.into())
            }
        }
    }
}

/// UTF-8 text to raw bytes. Both fields must be present.
fn encode(request: UploadRequest) -> Result<(String, Vec<u8>), EncodeError> {
    let file_name = request
        .file_name
        .ok_or(EncodeError::MissingField("fileName"))?;
    let file_content = request
        .file_content
        .ok_or(EncodeError::MissingField("fileContent"))?;

    Ok((file_name, file_content.into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObjectStoreError;
    use crate::storage::MockObjectStore;
    use pretty_assertions::assert_eq;
    use tokio_test::{assert_err, assert_ok};

    fn gateway(store: MockObjectStore) -> UploadGateway {
        UploadGateway::new(Arc::new(store), "/data")
    }

    #[tokio::test]
    async fn upload_round_trip() {
        let mut store = MockObjectStore::new();
        store
            .expect_put()
            .withf(|folder, bytes, name, mime_type| {
                folder == "/data"
                    && bytes.as_slice() == br#"{"k":1}"#
                    && name == "x.json"
                    && mime_type == "application/json"
            })
            .times(1)
            .returning(|_, _, _, _| Ok("https://store/x.json".to_string()));

        let result = gateway(store)
            .upload(UploadRequest::new("x.json", r#"{"k":1}"#))
            .await;

        assert_eq!(result, UploadResult::stored("https://store/x.json"));
    }

    #[tokio::test]
    async fn upload_preserves_multibyte_content() {
        let mut store = MockObjectStore::new();
        store
            .expect_put()
            .withf(|_, bytes, _, _| bytes.as_slice() == "{\"name\":\"Zoë\"}".as_bytes())
            .times(1)
            .returning(|_, _, _, _| Ok("https://store/zoe.json".to_string()));

        let result = gateway(store)
            .upload(UploadRequest::new("zoe.json", "{\"name\":\"Zoë\"}"))
            .await;
        assert!(result.success);
    }

    #[tokio::test]
    async fn store_failure_is_folded_into_result() {
        let mut store = MockObjectStore::new();
        store
            .expect_put()
            .times(1)
            .returning(|_, _, _, _| Err(ObjectStoreError::Upload("access denied".to_string())));

        let result = gateway(store)
            .upload(UploadRequest::new("x.json", "{}"))
            .await;

        assert_eq!(
            result,
            UploadResult::failed("Object upload failed: access denied")
        );
    }

    #[tokio::test]
    async fn try_upload_raises_store_failure() {
        let mut store = MockObjectStore::new();
        store
            .expect_put()
            .times(1)
            .returning(|_, _, _, _| Err(ObjectStoreError::Upload("timeout".to_string())));

        let err = assert_err!(
            gateway(store)
                .try_upload(UploadRequest::new("x.json", "{}"))
                .await
        );
        assert_eq!(
            err,
            UploadError::Store(ObjectStoreError::Upload("timeout".to_string()))
        );
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_store() {
        let mut store = MockObjectStore::new();
        store.expect_put().times(0);
        let gateway = gateway(store);

        let result = gateway
            .upload(UploadRequest {
                file_name: None,
                file_content: Some("{}".to_string()),
            })
            .await;
        assert_eq!(result, UploadResult::failed("Missing required field: fileName"));

        let result = gateway
            .upload(UploadRequest {
                file_name: Some("x.json".to_string()),
                file_content: None,
            })
            .await;
        assert_eq!(
            result,
            UploadResult::failed("Missing required field: fileContent")
        );
    }

    #[test]
    fn encode_converts_text_to_bytes() {
        let (name, bytes) = assert_ok!(encode(UploadRequest::new("a.json", "[1,2]")));
        assert_eq!(name, "a.json");
        assert_eq!(bytes, b"[1,2]".to_vec());
    }
}
