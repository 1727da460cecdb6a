pub mod record;
pub mod validation;

pub use record::Agent;
pub use validation::{validate_agent_name, validate_assistant_id, RESERVED_NAMES};
