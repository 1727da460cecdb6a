//! voicedir: Voice Agent Directory
//!
//! Registers named voice agents (a name plus an external assistant id) in a
//! key-value store and serves each one at `/agent/<name>` with an embedded voice
//! widget. Mutations go through a JSON API gated by a shared-password session
//! cookie.

pub mod agent;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod store;
pub mod tooling;
