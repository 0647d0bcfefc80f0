// S3/MinIO client implementation

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{Builder as S3ConfigBuilder, Region},
    error::DisplayErrorContext,
    primitives::ByteStream,
    Client,
};

use super::ObjectStore;
use crate::config::StorageConfig;
use crate::error::ObjectStoreError;

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStore {
    /// Build a client from the standard AWS credential chain plus the
    /// configured endpoint override (MinIO, R2, ...).
    pub async fn new(config: &StorageConfig) -> Result<Self, ObjectStoreError> {
        if config.bucket.is_empty() {
            return Err(ObjectStoreError::Configuration(
                "bucket name is empty".to_string(),
            ));
        }

        let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = S3ConfigBuilder::from(&shared).force_path_style(config.path_style);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        tracing::info!(
            bucket = %config.bucket,
            endpoint = ?config.endpoint,
            "S3 client initialized"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        folder: &str,
        bytes: Vec<u8>,
        name: &str,
        mime_type: &str,
    ) -> Result<String, ObjectStoreError> {
        let key = object_key(folder, name);
        tracing::debug!("Uploading object to S3: {} ({} bytes)", key, bytes.len());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(mime_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| ObjectStoreError::Upload(DisplayErrorContext(&e).to_string()))?;

        tracing::info!("Object uploaded successfully: {}", key);
        Ok(object_url(&self.public_base_url, &key))
    }
}

/// Object key for `name` inside `folder`; leading and trailing slashes on the
/// folder are not part of the key.
pub fn object_key(folder: &str, name: &str) -> String {
    let folder = folder.trim_matches('/');
    let name = name.trim_start_matches('/');
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}

pub fn object_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_key_strips_folder_slashes() {
        assert_eq!(object_key("/data", "x.json"), "data/x.json");
        assert_eq!(object_key("/data/", "/x.json"), "data/x.json");
        assert_eq!(object_key("reports/2025", "x.json"), "reports/2025/x.json");
    }

    #[test]
    fn test_object_key_without_folder() {
        assert_eq!(object_key("/", "x.json"), "x.json");
        assert_eq!(object_key("", "x.json"), "x.json");
    }

    #[test]
    fn test_object_url() {
        assert_eq!(
            object_url("https://store.example.com/bucket/", "data/x.json"),
            "https://store.example.com/bucket/data/x.json"
        );
        assert_eq!(
            object_url("https://store", "data/x.json"),
            "https://store/data/x.json"
        );
    }
}
