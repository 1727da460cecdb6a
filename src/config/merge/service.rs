//! MergeService: orchestrates sources, applies merge policy, deserializes to AppConfig.

use crate::config::sources::{environment, file};
use crate::config::AppConfig;
use config::ConfigError;
use std::path::Path;

use super::policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> config file -> environment (highest).
    ///
    /// An explicit path replaces the per-user config file and must exist.
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = match explicit {
            Some(path) => file::add_explicit(builder, path)?,
            None => file::add_global(builder)?,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
