//! Transport seam: one network call per encoded request.

use crate::api::Operation;
use crate::form::EncodedRequest;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("network unavailable")]
    Offline,
    /// Server answered non-2xx; the message is shown verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("response decoding failed: {0}")]
    Decode(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
}

/// Performs exactly one call for the given operation. No retries, no
/// partial-failure handling: the call fully succeeds or fully fails.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(
        &self,
        op: &Operation,
        request: EncodedRequest,
    ) -> Result<Value, TransportError>;
}
