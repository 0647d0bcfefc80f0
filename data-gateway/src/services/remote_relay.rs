use std::sync::Arc;

use serde_json::Value;
use shared::observability::{upstream_span, UpstreamCall, UpstreamKind};
use tracing::Instrument;

use crate::error::FetchError;
use crate::remote::HttpFetcher;

/// Document relayed when no other source is configured
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/forgedbyfreedom/fbf-data/main/combined.json";

/// Read-through relay for a single remote JSON document. Every call re-fetches.
pub struct RemoteRelay {
    fetcher: Arc<dyn HttpFetcher>,
    source_url: String,
}

impl RemoteRelay {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, source_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            source_url: source_url.into(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub async fn get_remote(&self) -> Result<Value, FetchError> {
        let call = UpstreamCall::start(UpstreamKind::RemoteHost, &self.source_url);

        let outcome = self
            .fetch_document()
            .instrument(upstream_span(UpstreamKind::RemoteHost, &self.source_url))
            .await;

        match &outcome {
            Ok(_) => call.succeeded(),
            Err(e) => call.failed(e),
        }
        outcome
    }

    async fn fetch_document(&self) -> Result<Value, FetchError> {
        let document = self.fetcher.get(&self.source_url).await?;

        if !document.is_success() {
            return Err(FetchError::BadStatus(document.status));
        }

        serde_json::from_slice(&document.body).map_err(|e| FetchError::MalformedBody(e.to_string()))
    }
}
