//! Agent name and assistant id validation owned by the agent domain.

/// Names that collide with structural path segments.
pub const RESERVED_NAMES: &[&str] = &["admin", "api", "auth", "login", "logout", "_next", "public"];

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;

/// Validate an agent name. Pure; the name is checked exactly as given.
pub fn validate_agent_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Agent name is required".to_string());
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(
            "Agent name must be lowercase letters, numbers, and hyphens only".to_string(),
        );
    }

    if name.len() < MIN_NAME_LEN {
        return Err(format!(
            "Agent name must be at least {} characters",
            MIN_NAME_LEN
        ));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(format!(
            "Agent name must be less than {} characters",
            MAX_NAME_LEN
        ));
    }

    if RESERVED_NAMES.contains(&name) {
        return Err("This agent name is reserved".to_string());
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err("Agent name cannot start or end with a hyphen".to_string());
    }

    Ok(())
}

/// Validate an assistant id after trimming.
pub fn validate_assistant_id(assistant_id: &str) -> Result<(), String> {
    if assistant_id.trim().is_empty() {
        return Err("Assistant ID is required".to_string());
    }
    Ok(())
}
