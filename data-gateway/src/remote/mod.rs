//! Outbound HTTP access to the remote document host

pub mod http_client;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::FetchError;

pub use http_client::ReqwestFetcher;

/// Raw upstream response: status code and undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: Bytes,
}

impl FetchedDocument {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Perform one plain GET; no retries
    async fn get(&self, url: &str) -> Result<FetchedDocument, FetchError>;
}
