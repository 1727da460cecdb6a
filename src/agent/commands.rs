//! Agent command service: single entry point per agent CLI command variant.
//!
//! Owns agent workflow logic for the CLI; the CLI parses, calls one method per
//! variant, and prints the formatted output.

use crate::agent::{Agent, AgentRegistry};
use crate::error::ApiError;
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::json;

pub struct AgentCommandService;

/// Result of agent list command.
#[derive(Debug, Clone)]
pub struct AgentListResult {
    pub agents: Vec<Agent>,
}

/// Result of agent delete command.
#[derive(Debug, Clone)]
pub struct AgentDeleteResult {
    pub name: String,
}

impl AgentCommandService {
    pub async fn list(registry: &AgentRegistry) -> AgentListResult {
        AgentListResult {
            agents: registry.list().await,
        }
    }

    pub async fn show(registry: &AgentRegistry, name: &str) -> Result<Agent, ApiError> {
        registry
            .get(name)
            .await
            .ok_or_else(|| ApiError::AgentNotFound("Agent not found".to_string()))
    }

    pub async fn create(
        registry: &AgentRegistry,
        name: &str,
        assistant_id: &str,
    ) -> Result<Agent, ApiError> {
        registry.create(name, assistant_id).await
    }

    pub async fn update(
        registry: &AgentRegistry,
        name: &str,
        assistant_id: &str,
    ) -> Result<Agent, ApiError> {
        registry.update(name, assistant_id).await
    }

    /// Delete an agent; absence is reported as an error at the CLI.
    pub async fn delete(registry: &AgentRegistry, name: &str) -> Result<AgentDeleteResult, ApiError> {
        if registry.delete(name).await? {
            Ok(AgentDeleteResult {
                name: name.to_string(),
            })
        } else {
            Err(ApiError::AgentNotFound("Agent not found".to_string()))
        }
    }

    pub fn format_list(result: &AgentListResult, format: &str) -> Result<String, ApiError> {
        match format {
            "json" => Ok(json!({ "agents": result.agents }).to_string()),
            "text" => Ok(Self::format_list_text(&result.agents)),
            other => Err(ApiError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn format_list_text(agents: &[Agent]) -> String {
        if agents.is_empty() {
            return "No agents registered.".to_string();
        }
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Name", "Assistant ID", "Created", "Path"]);
        for agent in agents {
            table.add_row(vec![
                agent.name.clone(),
                agent.assistant_id.clone(),
                agent.created_at.to_rfc3339(),
                agent.public_path(),
            ]);
        }
        table.to_string()
    }

    pub fn format_agent(agent: &Agent) -> String {
        format!(
            "Name:         {}\nAssistant ID: {}\nCreated:      {}\nPath:         {}",
            agent.name,
            agent.assistant_id,
            agent.created_at.to_rfc3339(),
            agent.public_path()
        )
    }
}
