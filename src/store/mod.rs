//! Agent Store
//!
//! Typed adapter over a key-value backend. Owns the `agent:<name>` key layout and
//! the JSON encoding of agent records; the registry above it only sees `Agent`s.

pub mod contract;
pub mod memory;
pub mod persistence;

pub use contract::KvBackend;
pub use memory::MemoryBackend;
pub use persistence::SledBackend;

use crate::agent::Agent;
use crate::config::{StoreBackend, StoreConfig};
use crate::error::{ApiError, StorageError};
use std::sync::Arc;
use tracing::{info, warn};

/// Key prefix shared by every agent record.
pub const AGENT_KEY_PREFIX: &str = "agent:";

/// Store key for the agent named `name`.
pub fn agent_key(name: &str) -> String {
    format!("{}{}", AGENT_KEY_PREFIX, name)
}

/// Agent store handle.
///
/// Constructed once by the composition root and shared by reference; there is
/// no process-global client.
pub struct AgentStore {
    backend: Arc<dyn KvBackend>,
}

impl AgentStore {
    /// Open the backend named by `config`.
    ///
    /// Any failure to resolve or open the backend is a `ConfigError`; it is not
    /// retried.
    pub fn open(config: &StoreConfig) -> Result<Self, ApiError> {
        let backend: Arc<dyn KvBackend> = match config.backend {
            StoreBackend::Memory => {
                info!(backend = "memory", "Opened agent store");
                Arc::new(MemoryBackend::new())
            }
            StoreBackend::Sled => {
                let path = config.resolve_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        ApiError::ConfigError(format!(
                            "Failed to create store directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
                let backend = SledBackend::open(&path).map_err(|e| {
                    ApiError::ConfigError(format!(
                        "Failed to open store at {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                info!(backend = "sled", path = %path.display(), "Opened agent store");
                Arc::new(backend)
            }
        };
        Ok(Self::with_backend(backend))
    }

    /// Wrap an already constructed backend.
    pub fn with_backend(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Flush pending writes. The handle stays usable afterwards.
    pub async fn close(&self) -> Result<(), StorageError> {
        self.backend.flush().await?;
        info!("Closed agent store");
        Ok(())
    }

    pub async fn get_agent(&self, name: &str) -> Result<Option<Agent>, StorageError> {
        match self.backend.get(&agent_key(name)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Whether any value is stored under the agent's key, decodable or not.
    pub async fn contains(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.backend.get(&agent_key(name)).await?.is_some())
    }

    pub async fn put_agent(&self, agent: &Agent) -> Result<(), StorageError> {
        let raw = serde_json::to_string(agent)?;
        self.backend.set(&agent_key(&agent.name), &raw).await
    }

    pub async fn delete_agent(&self, name: &str) -> Result<bool, StorageError> {
        self.backend.delete(&agent_key(name)).await
    }

    /// All keys under the agent prefix, in backend scan order.
    pub async fn agent_keys(&self) -> Result<Vec<String>, StorageError> {
        self.backend.keys(AGENT_KEY_PREFIX).await
    }

    /// Bulk read. Missing keys and entries that fail to decode come back as `None`.
    pub async fn get_agents(&self, keys: &[String]) -> Result<Vec<Option<Agent>>, StorageError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let raw_values = self.backend.mget(keys).await?;
        Ok(keys
            .iter()
            .zip(raw_values)
            .map(|(key, raw)| {
                let raw = raw?;
                match serde_json::from_str::<Agent>(&raw) {
                    Ok(agent) => Some(agent),
                    Err(e) => {
                        warn!(key = %key, error = %e, "Skipping undecodable agent record");
                        None
                    }
                }
            })
            .collect())
    }
}
