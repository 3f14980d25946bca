//! Dispatch engine: upstream client, attempt racer and orchestrator

pub mod client;
pub mod dispatcher;
pub mod racer;

pub use client::{ReqwestUpstreamClient, UpstreamClient, RELAY_USER_AGENT};
pub use dispatcher::RelayDispatcher;
pub use racer::AttemptRacer;
