//! Span helpers for calls leaving the gateway

use std::time::Instant;
use tracing::{info, warn, Span};

/// Kind of collaborator an upstream call is made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    CollectionStore,
    RemoteHost,
    ObjectStore,
}

impl UpstreamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamKind::CollectionStore => "collection_store",
            UpstreamKind::RemoteHost => "remote_host",
            UpstreamKind::ObjectStore => "object_store",
        }
    }
}

/// Create a span covering a single upstream call
pub fn upstream_span(kind: UpstreamKind, target: &str) -> Span {
    tracing::info_span!(
        "upstream_call",
        upstream = kind.as_str(),
        target = %target
    )
}

/// Times one upstream call and logs its outcome
#[derive(Debug)]
pub struct UpstreamCall {
    kind: UpstreamKind,
    target: String,
    start_time: Instant,
}

impl UpstreamCall {
    pub fn start(kind: UpstreamKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    pub fn succeeded(self) {
        info!(
            upstream = self.kind.as_str(),
            target = %self.target,
            duration_ms = self.elapsed_ms(),
            "Upstream call completed"
        );
    }

    pub fn failed(self, error: &dyn std::fmt::Display) {
        warn!(
            upstream = self.kind.as_str(),
            target = %self.target,
            duration_ms = self.elapsed_ms(),
            error = %error,
            "Upstream call failed"
        );
    }
}
