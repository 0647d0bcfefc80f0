use std::sync::Arc;

use serde_json::Value;
use shared::observability::{upstream_span, UpstreamCall, UpstreamKind};
use tracing::Instrument;

use crate::db::CollectionStore;
use crate::error::StoreError;
use crate::models::{ReadResult, Record};

/// Longest knowledge-base body accepted, in characters
pub const MAX_ENTRY_BODY_CHARS: usize = 15_000;

/// Reads the configured collection and ingests knowledge-base entries
pub struct CollectionReader {
    store: Arc<dyn CollectionStore>,
    collection: String,
    knowledge_base: String,
}

impl CollectionReader {
    pub fn new(
        store: Arc<dyn CollectionStore>,
        collection: impl Into<String>,
        knowledge_base: impl Into<String>,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            knowledge_base: knowledge_base.into(),
        }
    }

    /// All records of the collection, unfiltered and in store order
    pub async fn get_all(&self) -> Result<ReadResult, StoreError> {
        let call = UpstreamCall::start(UpstreamKind::CollectionStore, &self.collection);

        let outcome = self
            .store
            .query_all(&self.collection)
            .instrument(upstream_span(UpstreamKind::CollectionStore, &self.collection))
            .await;

        match outcome {
            Ok(items) => {
                call.succeeded();
                Ok(ReadResult { items })
            }
            Err(e) => {
                call.failed(&e);
                Err(e)
            }
        }
    }

    /// Store `{title, body}` in the knowledge-base collection, cutting the
    /// body down to [`MAX_ENTRY_BODY_CHARS`] characters.
    pub async fn ingest_entry(&self, title: String, body: String) -> Result<Record, StoreError> {
        let original_chars = body.chars().count();
        let body = truncate_chars(&body, MAX_ENTRY_BODY_CHARS);
        if original_chars > MAX_ENTRY_BODY_CHARS {
            tracing::warn!(
                title = %title,
                original_chars,
                "Knowledge-base body truncated to {} characters",
                MAX_ENTRY_BODY_CHARS
            );
        }

        let mut record = Record::new();
        record.insert("title".to_string(), Value::String(title));
        record.insert("body".to_string(), Value::String(body.to_string()));

        let call = UpstreamCall::start(UpstreamKind::CollectionStore, &self.knowledge_base);
        let outcome = self
            .store
            .insert(&self.knowledge_base, record)
            .instrument(upstream_span(UpstreamKind::CollectionStore, &self.knowledge_base))
            .await;

        match &outcome {
            Ok(_) => call.succeeded(),
            Err(e) => call.failed(e),
        }
        outcome
    }
}

/// Longest prefix of `s` holding at most `max_chars` characters
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
