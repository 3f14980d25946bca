//! Domain layer - Core business logic and entities

pub mod chain;
pub mod error;
pub mod registry;
pub mod relay;

pub use chain::{validate_chain_id, Chain, ChainId, ChainValidationError};
pub use error::DomainError;
pub use registry::{Registry, ServerConfig};
pub use relay::{select_candidates, RaceOutcome, RelayRequest, UpstreamResponse};
