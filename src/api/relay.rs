//! Relay ingress handler: any method under `/{chain_id}/{*rest}`

use axum::{
    extract::{Path, State},
    http::{header, Method},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::domain::{ChainId, RelayRequest, UpstreamResponse};

use super::state::AppState;
use super::types::ApiError;

/// Forward an inbound call to the winning upstream for its chain.
///
/// The inbound body is passed through untouched in both directions; outbound
/// headers are the fixed set applied by the upstream client.
pub async fn relay_handler(
    State(state): State<AppState>,
    Path((chain_id, rest)): Path<(String, String)>,
    method: Method,
    body: Bytes,
) -> Response {
    // An id that fails validation can never be present in the registry.
    let Ok(chain_id) = ChainId::new(chain_id) else {
        return ApiError::not_found("Chain not found").into_response();
    };

    let request = RelayRequest::new(method, format!("/{}", rest), body);

    match state.relay.dispatch(&chain_id, request).await {
        Ok(response) => passthrough(response),
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn passthrough(upstream: UpstreamResponse) -> Response {
    (
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response()
}
