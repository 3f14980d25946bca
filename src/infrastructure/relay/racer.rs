//! Attempt racing: concurrent upstream calls with per-attempt timeouts
//!
//! Every candidate is dialed concurrently; the winner is chosen by draining
//! pending attempts from the END of the submission order (last-started
//! first), not by strict first-to-complete order. The drain order is
//! observable: when several attempts succeed, the last-submitted candidate
//! wins.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{DomainError, RaceOutcome, RelayRequest, UpstreamResponse};
use crate::infrastructure::relay::client::UpstreamClient;

/// Races one candidate set against the upstream client.
///
/// Holds no per-request state; one racer serves every dispatch.
#[derive(Debug, Clone)]
pub struct AttemptRacer {
    client: Arc<dyn UpstreamClient>,
    attempt_timeout: Duration,
}

impl AttemptRacer {
    pub fn new(client: Arc<dyn UpstreamClient>, attempt_timeout: Duration) -> Self {
        Self {
            client,
            attempt_timeout,
        }
    }

    /// Launch one attempt per candidate and arbitrate.
    ///
    /// A timeout or transport fault fails only its own attempt. Attempts
    /// still in flight once a winner is found are left to finish detached;
    /// their results are dropped and can never displace the winner.
    pub async fn race(&self, candidates: Vec<String>, request: RelayRequest) -> RaceOutcome {
        let mut attempts: Vec<JoinHandle<Result<UpstreamResponse, DomainError>>> = candidates
            .into_iter()
            .map(|endpoint| self.spawn_attempt(endpoint, request.clone()))
            .collect();

        // Drain pending attempts from the end of the submission order.
        while let Some(handle) = attempts.pop() {
            match handle.await {
                Ok(Ok(response)) => return RaceOutcome::Winner(response),
                Ok(Err(_)) => continue,
                Err(e) => {
                    debug!(error = %e, "Attempt task did not complete");
                    continue;
                }
            }
        }

        RaceOutcome::AllFailed
    }

    fn spawn_attempt(
        &self,
        endpoint: String,
        request: RelayRequest,
    ) -> JoinHandle<Result<UpstreamResponse, DomainError>> {
        let client = Arc::clone(&self.client);
        let timeout = self.attempt_timeout;

        tokio::spawn(async move {
            match tokio::time::timeout(timeout, client.forward(&endpoint, &request)).await {
                Ok(Ok(response)) => {
                    debug!(endpoint = %endpoint, status = %response.status, "Upstream attempt completed");
                    Ok(response)
                }
                Ok(Err(e)) => {
                    warn!(endpoint = %endpoint, error = %e, "Upstream attempt failed");
                    Err(e)
                }
                Err(_) => {
                    warn!(
                        endpoint = %endpoint,
                        timeout_ms = timeout.as_millis() as u64,
                        "Upstream attempt timed out"
                    );
                    Err(DomainError::transport(format!(
                        "{}: attempt timed out",
                        endpoint
                    )))
                }
            }
        })
    }
}
