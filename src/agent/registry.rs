//! Agent registry: validation and CRUD over the agent store.
//!
//! Read paths degrade to `None` or an empty list when the store faults; write
//! paths return the fault. Check-then-act sequences are not atomic, so two
//! concurrent creates of the same unused name both succeed and the later write
//! wins.

use crate::agent::domain::{validate_agent_name, validate_assistant_id, Agent};
use crate::error::ApiError;
use crate::store::{agent_key, AgentStore};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Agent registry backed by a shared store handle.
#[derive(Clone)]
pub struct AgentRegistry {
    store: Arc<AgentStore>,
}

impl AgentRegistry {
    pub fn new(store: Arc<AgentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<AgentStore> {
        &self.store
    }

    /// Create a new agent.
    ///
    /// `name` is trimmed and lower-cased, `assistant_id` trimmed, before validation.
    pub async fn create(&self, name: &str, assistant_id: &str) -> Result<Agent, ApiError> {
        let name = name.trim().to_lowercase();
        let assistant_id = assistant_id.trim();

        validate_agent_name(&name).map_err(ApiError::InvalidAgent)?;
        validate_assistant_id(assistant_id).map_err(ApiError::InvalidAgent)?;

        if self.store.contains(&name).await? {
            return Err(ApiError::AgentExists(
                "Agent with this name already exists".to_string(),
            ));
        }

        let agent = Agent {
            name,
            assistant_id: assistant_id.to_string(),
            created_at: Utc::now(),
        };
        self.store.put_agent(&agent).await?;
        info!(agent = %agent.name, "Created agent");
        Ok(agent)
    }

    /// Look up an agent by exact name. Store faults read as a miss.
    pub async fn get(&self, name: &str) -> Option<Agent> {
        match self.store.get_agent(name).await {
            Ok(Some(agent)) => Self::admit(&agent_key(name), agent),
            Ok(None) => None,
            Err(e) => {
                error!(agent = %name, error = %e, "Store error while reading agent");
                None
            }
        }
    }

    /// All agents ordered by ascending creation time. Store faults read as empty.
    ///
    /// The sort is stable, so agents created at the same instant keep the
    /// backend's scan order.
    pub async fn list(&self) -> Vec<Agent> {
        let keys = match self.store.agent_keys().await {
            Ok(keys) => keys,
            Err(e) => {
                error!(error = %e, "Store error while listing agent keys");
                return Vec::new();
            }
        };

        let records = match self.store.get_agents(&keys).await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Store error while reading agents");
                return Vec::new();
            }
        };

        let mut agents: Vec<Agent> = keys
            .iter()
            .zip(records)
            .filter_map(|(key, record)| record.and_then(|agent| Self::admit(key, agent)))
            .collect();
        agents.sort_by_key(|agent| agent.created_at);
        agents
    }

    /// Replace the assistant id of an existing agent, keeping name and creation time.
    pub async fn update(&self, name: &str, assistant_id: &str) -> Result<Agent, ApiError> {
        let assistant_id = assistant_id.trim();
        validate_assistant_id(assistant_id).map_err(ApiError::InvalidAgent)?;

        let existing = self
            .store
            .get_agent(name)
            .await?
            .ok_or_else(|| ApiError::AgentNotFound("Agent not found".to_string()))?;

        let updated = Agent {
            assistant_id: assistant_id.to_string(),
            ..existing
        };
        self.store.put_agent(&updated).await?;
        info!(agent = %updated.name, "Updated agent");
        Ok(updated)
    }

    /// Delete an agent. Returns `false` when there was nothing to delete.
    ///
    /// Presence is judged on the raw key, so records that no longer decode can
    /// still be removed.
    pub async fn delete(&self, name: &str) -> Result<bool, ApiError> {
        let removed = self.store.delete_agent(name).await?;
        if removed {
            info!(agent = %name, "Deleted agent");
        }
        Ok(removed)
    }

    /// Drop records that could not have been created through this registry.
    fn admit(key: &str, agent: Agent) -> Option<Agent> {
        if let Err(reason) = validate_agent_name(&agent.name) {
            warn!(key = %key, reason = %reason, "Discarding agent record with invalid name");
            return None;
        }
        if agent_key(&agent.name) != key {
            warn!(key = %key, name = %agent.name, "Discarding agent record stored under a foreign key");
            return None;
        }
        Some(agent)
    }
}
