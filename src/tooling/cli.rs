//! CLI Tooling
//!
//! `serve` runs the HTTP surface; `agent` and `session` subcommands work directly
//! against the configured store. Sled holds an exclusive lock on its database,
//! so agent subcommands against a sled store must run while the server is stopped.

use crate::agent::{AgentCommandService, AgentRegistry};
use crate::auth::SessionAuthenticator;
use crate::config::{AppConfig, ConfigLoader};
use crate::error::ApiError;
use crate::server::{self, AppState};
use crate::store::AgentStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// voicedir - directory of voice agents at predictable public URLs
#[derive(Parser)]
#[command(name = "voicedir")]
#[command(about = "Register voice agents and serve each one at /agent/<name>")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the public pages and the admin API
    Serve {
        /// Address to bind (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Manage agents in the configured store
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },
    /// Session token utilities
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand)]
pub enum AgentCommands {
    /// List agents in creation order
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one agent
    Show { name: String },
    /// Register a new agent
    Create { name: String, assistant_id: String },
    /// Point an agent at a different assistant
    Update { name: String, assistant_id: String },
    /// Remove an agent
    Delete { name: String },
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Print a fresh admin session token for scripted API calls
    Issue,
}

impl Cli {
    /// Load configuration and fold the level, format and output flags into it.
    ///
    /// `--log-file` is passed to `init_logging` separately so it outranks
    /// VOICEDIR_LOG_FILE.
    pub fn load_config(&self) -> Result<AppConfig, ApiError> {
        let mut config = ConfigLoader::load_optional(self.config.as_deref())?;
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        Ok(config)
    }
}

/// Run one command. Session commands never touch the store, so they work while
/// a server holds the sled lock.
pub async fn run(config: AppConfig, command: &Commands) -> Result<String, ApiError> {
    if let Commands::Session { command } = command {
        return Ok(execute_session(command));
    }
    CliContext::new(config)?.execute(command).await
}

fn execute_session(command: &SessionCommands) -> String {
    match command {
        SessionCommands::Issue => crate::auth::create_session(),
    }
}

/// Opened store plus the registry over it, for the lifetime of one command.
pub struct CliContext {
    config: AppConfig,
    store: Arc<AgentStore>,
    registry: AgentRegistry,
}

impl CliContext {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let store = Arc::new(AgentStore::open(&config.store)?);
        let registry = AgentRegistry::new(Arc::clone(&store));
        Ok(Self {
            config,
            store,
            registry,
        })
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Execute a command and return its printable output.
    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let output = match command {
            Commands::Serve { bind } => self.serve(bind.as_deref()).await,
            Commands::Agent { command } => self.execute_agent(command).await,
            Commands::Session { command } => Ok(execute_session(command)),
        };
        self.store.close().await?;
        output
    }

    async fn execute_agent(&self, command: &AgentCommands) -> Result<String, ApiError> {
        let registry = &self.registry;
        match command {
            AgentCommands::List { format } => {
                let result = AgentCommandService::list(registry).await;
                AgentCommandService::format_list(&result, format)
            }
            AgentCommands::Show { name } => {
                let agent = AgentCommandService::show(registry, name).await?;
                Ok(AgentCommandService::format_agent(&agent))
            }
            AgentCommands::Create { name, assistant_id } => {
                let agent = AgentCommandService::create(registry, name, assistant_id).await?;
                Ok(format!(
                    "Created agent '{}' at {}",
                    agent.name,
                    agent.public_path()
                ))
            }
            AgentCommands::Update { name, assistant_id } => {
                let agent = AgentCommandService::update(registry, name, assistant_id).await?;
                Ok(format!(
                    "Updated agent '{}' to assistant {}",
                    agent.name, agent.assistant_id
                ))
            }
            AgentCommands::Delete { name } => {
                let result = AgentCommandService::delete(registry, name).await?;
                Ok(format!("Deleted agent '{}'", result.name))
            }
        }
    }

    async fn serve(&self, bind: Option<&str>) -> Result<String, ApiError> {
        let mut server_config = self.config.server.clone();
        if let Some(bind) = bind {
            server_config.bind = bind.to_string();
        }
        let addr = server_config.socket_addr()?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::ServerError(format!("Failed to bind {}: {}", addr, e)))?;

        let state = Arc::new(AppState {
            registry: self.registry.clone(),
            auth: SessionAuthenticator::new(&self.config.auth),
            widget: self.config.widget.clone(),
        });

        server::serve(listener, state, shutdown_signal()).await?;
        Ok("Server stopped".to_string())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
