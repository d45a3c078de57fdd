// src/transport/mod.rs
mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;

/// What the aggregator observes from one exchange: the status code. The
/// response body is irrelevant to reachability and is not read.
#[derive(Debug, Clone, Copy)]
pub struct TransportResponse {
    pub status: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid probe URL {path}: {source}")]
    InvalidUrl {
        path: String,
        source: url::ParseError,
    },

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Capability to perform one HTTP request and observe its outcome.
///
/// An `Err` means the transport failed before any response was obtained; a
/// response with an error status is still `Ok`. Implementations must be
/// cancel-safe: dropping the returned future abandons the in-flight
/// request, which is how the aggregator enforces per-probe ceilings.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<TransportResponse, TransportError>;
}
