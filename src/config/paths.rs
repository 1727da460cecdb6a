//! Platform directories for the config file, store data and log file.

use crate::error::ApiError;
use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "voicedir", "voicedir")
}

/// `<config dir>/config.toml`, e.g. `~/.config/voicedir/config.toml` on Linux.
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// `<data dir>/store`, used when the sled backend has no explicit path.
pub fn default_store_path() -> Result<PathBuf, ApiError> {
    let dirs = project_dirs().ok_or_else(|| {
        ApiError::ConfigError(
            "Could not determine platform data directory for the store; set store.path"
                .to_string(),
        )
    })?;
    Ok(dirs.data_dir().join("store"))
}

/// `<state dir>/voicedir.log`, falling back to the data dir where there is no
/// state dir (macOS, Windows).
pub fn default_log_file() -> Result<PathBuf, ApiError> {
    let dirs = project_dirs().ok_or_else(|| {
        ApiError::ConfigError(
            "Could not determine platform state directory for log file".to_string(),
        )
    })?;
    let base = dirs
        .state_dir()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| dirs.data_dir().to_path_buf());
    Ok(base.join("voicedir.log"))
}
