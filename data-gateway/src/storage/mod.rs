// Storage module for S3/MinIO integration

pub mod s3_client;

use async_trait::async_trait;

use crate::error::ObjectStoreError;

pub use s3_client::S3ObjectStore;

/// Blob storage addressable by folder and name
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` as `folder/name` and return a URL the object can be read from
    async fn put(
        &self,
        folder: &str,
        bytes: Vec<u8>,
        name: &str,
        mime_type: &str,
    ) -> Result<String, ObjectStoreError>;
}
