//! File-backed registry persistence
//!
//! The registry lives in a single JSON document. Loading tolerates a missing
//! or partial file (fields fall back to defaults) and writes the normalized
//! document back, so a fresh install starts from a well-formed file. The
//! server reads the document once at startup; only the registry editor writes
//! it afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{DomainError, Registry};

/// Default registry location under the platform data directory
pub fn default_registry_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("rpc-relay").join("registry.json"))
}

/// Loads and saves the registry document at a fixed path
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the explicit path when given, otherwise at the platform
    /// default
    pub fn from_override(path: Option<PathBuf>) -> Result<Self, DomainError> {
        let path = match path {
            Some(path) => path,
            None => default_registry_path().ok_or_else(|| {
                DomainError::registry("No platform data directory; set registry_path explicitly")
            })?,
        };
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry, falling back to defaults for a missing or empty
    /// file, and persist the normalized document back
    pub fn load_or_init(&self) -> Result<Registry, DomainError> {
        let registry = self.read()?;
        self.save(&registry)?;
        Ok(registry)
    }

    /// Load the registry without writing anything back
    pub fn read(&self) -> Result<Registry, DomainError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Registry file missing, using defaults");
            return Ok(Registry::default());
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| DomainError::registry(format!("Failed to read registry: {}", e)))?;

        if raw.trim().is_empty() {
            return Ok(Registry::default());
        }

        serde_json::from_str(&raw)
            .map_err(|e| DomainError::registry(format!("Malformed registry document: {}", e)))
    }

    /// Persist the registry document, creating parent directories as needed
    pub fn save(&self, registry: &Registry) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::registry(format!("Failed to create registry directory: {}", e))
            })?;
        }

        let raw = serde_json::to_string_pretty(registry)
            .map_err(|e| DomainError::registry(format!("Failed to serialize registry: {}", e)))?;

        fs::write(&self.path, raw)
            .map_err(|e| DomainError::registry(format!("Failed to write registry: {}", e)))?;

        info!(path = %self.path.display(), chains = registry.chains.len(), "Registry saved");
        Ok(())
    }
}
