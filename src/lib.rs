//! RPC Relay
//!
//! A relay for JSON-RPC traffic: inbound calls under `/{chainId}/...` are
//! raced concurrently across the chain's configured upstream endpoints and
//! answered with the first successful upstream response. Individual endpoint
//! failures and timeouts are absorbed; only total exhaustion surfaces to the
//! caller.
//!
//! - Chains and server bind settings live in a persisted registry document,
//!   edited with the `registry` subcommand
//! - Only `https` endpoints are ever dialed; candidate order is randomized
//!   per dispatch

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
