//! Configuration
//!
//! Layered application configuration built with the `config` crate: built-in
//! defaults, then a TOML file, then environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub widget: WidgetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    merge::policy::DEFAULT_BIND.to_string()
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        self.bind.parse().map_err(|e| {
            ApiError::ConfigError(format!("Invalid server.bind '{}': {}", self.bind, e))
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Which key-value backend holds agent records. Exactly one is used per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Sled,
    Memory,
}

/// Store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Database directory for the sled backend; None means the platform data dir
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve the sled database path.
    pub fn resolve_path(&self) -> Result<PathBuf, ApiError> {
        match &self.path {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => paths::default_store_path(),
        }
    }
}

/// Admin authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared admin password; login is impossible while unset
    #[serde(default)]
    pub admin_password: Option<String>,

    /// Add the `Secure` attribute to the session cookie
    #[serde(default)]
    pub secure_cookie: bool,
}

pub const DEFAULT_WIDGET_SCRIPT_URL: &str =
    "https://unpkg.com/@vapi-ai/client-sdk-react/dist/embed/widget.umd.js";

/// Embedded voice widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Public key passed to the widget element
    #[serde(default)]
    pub public_key: Option<String>,

    /// Script that defines the `<vapi-widget>` element
    #[serde(default = "default_script_url")]
    pub script_url: String,
}

fn default_script_url() -> String {
    DEFAULT_WIDGET_SCRIPT_URL.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            script_url: default_script_url(),
        }
    }
}
