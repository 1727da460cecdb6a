//! Voice agent records
//!
//! The domain type and its validation rules, the registry that applies them over
//! the agent store, and the command service used by the CLI.

pub mod commands;
pub mod domain;
mod registry;

pub use commands::AgentCommandService;
pub use domain::{validate_agent_name, validate_assistant_id, Agent, RESERVED_NAMES};
pub use registry::AgentRegistry;
