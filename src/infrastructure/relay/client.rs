//! Upstream transport: one attempt against one candidate endpoint

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};

use crate::config::RelayConfig;
use crate::domain::{DomainError, RelayRequest, UpstreamResponse};

/// Identifying user-agent sent on every outbound attempt
pub const RELAY_USER_AGENT: &str = concat!("rpc-relay/", env!("CARGO_PKG_VERSION"));

/// Trait for upstream calls (for mocking)
///
/// A transport-level fault (refused connection, DNS, TLS) is an `Err`; any
/// completed HTTP exchange is `Ok`, whatever its status code.
#[async_trait]
pub trait UpstreamClient: Send + Sync + std::fmt::Debug {
    async fn forward(
        &self,
        base_url: &str,
        request: &RelayRequest,
    ) -> Result<UpstreamResponse, DomainError>;
}

/// Real upstream client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestUpstreamClient {
    client: reqwest::Client,
}

impl ReqwestUpstreamClient {
    pub fn new(config: &RelayConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn forward(
        &self,
        base_url: &str,
        request: &RelayRequest,
    ) -> Result<UpstreamResponse, DomainError> {
        let url = format!("{}{}", base_url, request.sub_path);

        let response = self
            .client
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, RELAY_USER_AGENT)
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("{}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::transport(format!("{}: {}", url, e)))?;

        Ok(UpstreamResponse { status, body })
    }
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::{Mutex, RwLock};
    use std::time::Duration;

    use axum::http::StatusCode;
    use bytes::Bytes;

    use super::*;

    #[derive(Debug, Clone)]
    enum ScriptedOutcome {
        Respond { status: StatusCode, body: Bytes },
        Fail { message: String },
    }

    #[derive(Debug, Clone)]
    struct Script {
        delay: Duration,
        outcome: ScriptedOutcome,
    }

    /// Scripted upstream client: each base URL resolves to a fixed outcome
    /// after an optional delay. Unscripted URLs fail like a dead endpoint.
    #[derive(Debug, Default)]
    pub struct MockUpstreamClient {
        scripts: RwLock<HashMap<String, Script>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockUpstreamClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(
            self,
            base_url: impl Into<String>,
            status: StatusCode,
            body: impl Into<Bytes>,
        ) -> Self {
            self.with_delayed_response(base_url, Duration::ZERO, status, body)
        }

        pub fn with_delayed_response(
            self,
            base_url: impl Into<String>,
            delay: Duration,
            status: StatusCode,
            body: impl Into<Bytes>,
        ) -> Self {
            self.scripts.write().unwrap().insert(
                base_url.into(),
                Script {
                    delay,
                    outcome: ScriptedOutcome::Respond {
                        status,
                        body: body.into(),
                    },
                },
            );
            self
        }

        pub fn with_error(self, base_url: impl Into<String>, message: impl Into<String>) -> Self {
            self.with_delayed_error(base_url, Duration::ZERO, message)
        }

        pub fn with_delayed_error(
            self,
            base_url: impl Into<String>,
            delay: Duration,
            message: impl Into<String>,
        ) -> Self {
            self.scripts.write().unwrap().insert(
                base_url.into(),
                Script {
                    delay,
                    outcome: ScriptedOutcome::Fail {
                        message: message.into(),
                    },
                },
            );
            self
        }

        /// An endpoint that never answers within any realistic test window
        pub fn with_silent(self, base_url: impl Into<String>) -> Self {
            self.with_delayed_error(base_url, Duration::from_secs(3600), "silent endpoint")
        }

        /// Base URLs of every attempt made so far, in call order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UpstreamClient for MockUpstreamClient {
        async fn forward(
            &self,
            base_url: &str,
            _request: &RelayRequest,
        ) -> Result<UpstreamResponse, DomainError> {
            self.calls.lock().unwrap().push(base_url.to_string());

            let script = self.scripts.read().unwrap().get(base_url).cloned();
            let Some(script) = script else {
                return Err(DomainError::transport(format!(
                    "No mock script for {}",
                    base_url
                )));
            };

            if !script.delay.is_zero() {
                tokio::time::sleep(script.delay).await;
            }

            match script.outcome {
                ScriptedOutcome::Respond { status, body } => {
                    Ok(UpstreamResponse { status, body })
                }
                ScriptedOutcome::Fail { message } => Err(DomainError::transport(message)),
            }
        }
    }
}
