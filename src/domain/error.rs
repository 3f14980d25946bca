use thiserror::Error;

use crate::domain::chain::ChainId;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Chain not found: {chain_id}")]
    ChainNotFound { chain_id: String },

    #[error("No valid RPCs found for chain {chain_id}")]
    NoValidRpcs { chain_id: String },

    #[error("All RPCs failed for chain {chain_id}")]
    AllRpcsFailed { chain_id: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Registry error: {message}")]
    Registry { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn chain_not_found(chain_id: &ChainId) -> Self {
        Self::ChainNotFound {
            chain_id: chain_id.to_string(),
        }
    }

    pub fn no_valid_rpcs(chain_id: &ChainId) -> Self {
        Self::NoValidRpcs {
            chain_id: chain_id.to_string(),
        }
    }

    pub fn all_rpcs_failed(chain_id: &ChainId) -> Self {
        Self::AllRpcsFailed {
            chain_id: chain_id.to_string(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_not_found_error() {
        let chain_id = ChainId::new("7").unwrap();
        let error = DomainError::chain_not_found(&chain_id);
        assert_eq!(error.to_string(), "Chain not found: 7");
    }

    #[test]
    fn test_no_valid_rpcs_error() {
        let chain_id = ChainId::new("137").unwrap();
        let error = DomainError::no_valid_rpcs(&chain_id);
        assert_eq!(error.to_string(), "No valid RPCs found for chain 137");
    }

    #[test]
    fn test_transport_error() {
        let error = DomainError::transport("connection refused");
        assert_eq!(error.to_string(), "Transport error: connection refused");
    }
}
