use async_trait::async_trait;
use reqwest::Client;

use super::{FetchedDocument, HttpFetcher};
use crate::error::FetchError;

/// [`HttpFetcher`] over a shared reqwest connection pool
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("data-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchedDocument, FetchError> {
        tracing::debug!("Fetching remote document: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        tracing::debug!("Remote host answered {} ({} bytes)", status, body.len());
        Ok(FetchedDocument { status, body })
    }
}
