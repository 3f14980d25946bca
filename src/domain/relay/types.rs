//! Ephemeral per-dispatch values

use axum::http::{Method, StatusCode};
use bytes::Bytes;

/// One inbound call, reduced to what is forwarded upstream.
///
/// Inbound headers are not carried: outbound attempts send a fixed header set
/// (see the upstream client). Created by the ingress handler, consumed by a
/// single dispatch, never shared across requests.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub method: Method,
    /// Remainder of the inbound path after the chain segment, leading slash
    /// included; appended verbatim to the candidate base URL
    pub sub_path: String,
    pub body: Bytes,
}

impl RelayRequest {
    pub fn new(method: Method, sub_path: impl Into<String>, body: Bytes) -> Self {
        Self {
            method,
            sub_path: sub_path.into(),
            body,
        }
    }
}

/// A completed upstream attempt: status and body exactly as received.
///
/// Non-2xx statuses are still successes at this level; business-level errors
/// from an upstream are passed through, not retried.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Result of racing one candidate set
#[derive(Debug)]
pub enum RaceOutcome {
    /// The first successful attempt in drain order
    Winner(UpstreamResponse),
    /// Every attempt ended in a transport failure or timeout
    AllFailed,
}
