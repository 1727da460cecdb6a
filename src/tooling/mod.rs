//! Tooling
//!
//! Command-line entry points: serving the directory and administering agents
//! directly against the configured store.

pub mod cli;

pub use cli::{run, Cli, CliContext, Commands};
