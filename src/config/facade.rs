//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::AppConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the per-user config file and environment.
    pub fn load() -> Result<AppConfig, ApiError> {
        Ok(MergeService::load(None)?)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ApiError> {
        Ok(MergeService::load(Some(path))?)
    }

    /// Load from `path` when given, otherwise from the standard locations.
    pub fn load_optional(path: Option<&Path>) -> Result<AppConfig, ApiError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }
}
