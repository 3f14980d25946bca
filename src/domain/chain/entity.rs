//! Chain entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_chain_id, ChainValidationError};

/// Chain identifier - opaque key naming a target network, usable as a URL
/// path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    /// Create a new ChainId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ChainValidationError> {
        let id = id.into();
        validate_chain_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChainId {
    type Error = ChainValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A relayed network: identifier, display name and its upstream RPC endpoints.
///
/// The endpoint list is ordered as configured; candidate ordering for a
/// dispatch is derived from a shuffled copy, never by mutating this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    #[serde(rename = "chainId")]
    pub chain_id: ChainId,
    pub name: String,
    #[serde(default)]
    pub rpc: Vec<String>,
}

impl Chain {
    pub fn new(chain_id: ChainId, name: impl Into<String>) -> Self {
        Self {
            chain_id,
            name: name.into(),
            rpc: Vec::new(),
        }
    }

    pub fn with_rpc(mut self, rpc: Vec<String>) -> Self {
        self.rpc = rpc;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_roundtrip() {
        let id = ChainId::new("1").unwrap();
        assert_eq!(id.as_str(), "1");
        assert_eq!(id.to_string(), "1");
        assert_eq!(String::from(id), "1");
    }

    #[test]
    fn test_chain_id_rejects_invalid() {
        assert!(ChainId::new("").is_err());
        assert!(ChainId::new("a/b").is_err());
    }

    #[test]
    fn test_chain_serde_uses_camel_case_id() {
        let chain = Chain::new(ChainId::new("1").unwrap(), "Ethereum Mainnet")
            .with_rpc(vec!["https://rpc.example".to_string()]);

        let json = serde_json::to_string(&chain).unwrap();
        assert!(json.contains("\"chainId\":\"1\""));
        assert!(json.contains("\"rpc\":[\"https://rpc.example\"]"));
    }

    #[test]
    fn test_chain_deserialize_defaults_missing_rpc() {
        let chain: Chain =
            serde_json::from_str(r#"{"chainId": "5", "name": "Goerli"}"#).unwrap();
        assert!(chain.rpc.is_empty());
    }

    #[test]
    fn test_chain_deserialize_rejects_invalid_id() {
        let result = serde_json::from_str::<Chain>(r#"{"chainId": "", "name": "x"}"#);
        assert!(result.is_err());
    }
}
