//! Registry document: the persisted set of chains plus server bind settings

use serde::{Deserialize, Serialize};

use crate::domain::chain::{Chain, ChainId};
use crate::domain::DomainError;

/// Server bind settings, stored alongside the chains in the registry document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8545
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The full registry: every configured chain and the server settings.
///
/// During a server run this is an immutable snapshot; the CRUD methods exist
/// for the registry editor, which operates on its own copy and persists it
/// back through the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub chains: Vec<Chain>,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Registry {
    /// Look up a chain by its identifier
    pub fn chain(&self, chain_id: &ChainId) -> Option<&Chain> {
        self.chains.iter().find(|c| &c.chain_id == chain_id)
    }

    /// Add a new chain; rejects duplicate identifiers
    pub fn add_chain(&mut self, chain: Chain) -> Result<(), DomainError> {
        if self.chain(&chain.chain_id).is_some() {
            return Err(DomainError::registry(format!(
                "Chain '{}' already exists",
                chain.chain_id
            )));
        }
        self.chains.push(chain);
        Ok(())
    }

    /// Remove a chain by identifier
    pub fn remove_chain(&mut self, chain_id: &ChainId) -> Result<Chain, DomainError> {
        let index = self
            .chains
            .iter()
            .position(|c| &c.chain_id == chain_id)
            .ok_or_else(|| DomainError::chain_not_found(chain_id))?;
        Ok(self.chains.remove(index))
    }

    /// Rename a chain and/or change its identifier
    pub fn edit_chain(
        &mut self,
        chain_id: &ChainId,
        new_id: Option<ChainId>,
        new_name: Option<String>,
    ) -> Result<(), DomainError> {
        if let Some(id) = &new_id {
            if id != chain_id && self.chain(id).is_some() {
                return Err(DomainError::registry(format!(
                    "Chain '{}' already exists",
                    id
                )));
            }
        }

        let chain = self
            .chain_mut(chain_id)
            .ok_or_else(|| DomainError::chain_not_found(chain_id))?;

        if let Some(id) = new_id {
            chain.chain_id = id;
        }
        if let Some(name) = new_name {
            chain.name = name;
        }
        Ok(())
    }

    /// Append an RPC URL to a chain's endpoint list
    pub fn add_rpc(&mut self, chain_id: &ChainId, url: impl Into<String>) -> Result<(), DomainError> {
        let url = url.into();
        let chain = self
            .chain_mut(chain_id)
            .ok_or_else(|| DomainError::chain_not_found(chain_id))?;

        if chain.rpc.contains(&url) {
            return Err(DomainError::registry(format!(
                "RPC '{}' already configured for chain '{}'",
                url, chain_id
            )));
        }
        chain.rpc.push(url);
        Ok(())
    }

    /// Remove an RPC URL from a chain's endpoint list
    pub fn remove_rpc(&mut self, chain_id: &ChainId, url: &str) -> Result<(), DomainError> {
        let chain = self
            .chain_mut(chain_id)
            .ok_or_else(|| DomainError::chain_not_found(chain_id))?;

        let index = chain.rpc.iter().position(|u| u == url).ok_or_else(|| {
            DomainError::registry(format!(
                "RPC '{}' not configured for chain '{}'",
                url, chain_id
            ))
        })?;
        chain.rpc.remove(index);
        Ok(())
    }

    /// Update server bind settings; unset fields keep their current value
    pub fn set_server(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    fn chain_mut(&mut self, chain_id: &ChainId) -> Option<&mut Chain> {
        self.chains.iter_mut().find(|c| &c.chain_id == chain_id)
    }
}
