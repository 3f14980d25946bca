//! Dispatch orchestration: lookup, select, race

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::RelayConfig;
use crate::domain::{
    select_candidates, ChainId, DomainError, RaceOutcome, Registry, RelayRequest,
    UpstreamResponse,
};
use crate::infrastructure::relay::client::UpstreamClient;
use crate::infrastructure::relay::racer::AttemptRacer;

/// Drives one dispatch end to end against an immutable registry snapshot.
///
/// Stateless across requests: the only shared pieces are the read-only
/// registry and the upstream client's connection pool.
#[derive(Debug, Clone)]
pub struct RelayDispatcher {
    registry: Arc<Registry>,
    racer: AttemptRacer,
}

impl RelayDispatcher {
    pub fn new(
        registry: Arc<Registry>,
        client: Arc<dyn UpstreamClient>,
        config: &RelayConfig,
    ) -> Self {
        Self {
            registry,
            racer: AttemptRacer::new(client, Duration::from_millis(config.attempt_timeout_ms)),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve the chain, build the candidate set and race it.
    ///
    /// # Errors
    /// `ChainNotFound` for an unknown chain, `NoValidRpcs` when the chain has
    /// no secure endpoints, `AllRpcsFailed` when every attempt fails.
    pub async fn dispatch(
        &self,
        chain_id: &ChainId,
        request: RelayRequest,
    ) -> Result<UpstreamResponse, DomainError> {
        let chain = self
            .registry
            .chain(chain_id)
            .ok_or_else(|| DomainError::chain_not_found(chain_id))?;

        let candidates = select_candidates(chain);
        if candidates.is_empty() {
            return Err(DomainError::no_valid_rpcs(chain_id));
        }

        debug!(
            chain = %chain_id,
            candidates = candidates.len(),
            method = %request.method,
            sub_path = %request.sub_path,
            "Dispatching request"
        );

        match self.racer.race(candidates, request).await {
            RaceOutcome::Winner(response) => Ok(response),
            RaceOutcome::AllFailed => Err(DomainError::all_rpcs_failed(chain_id)),
        }
    }
}
