//! Built-in defaults, the lowest-precedence layer.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.bind", DEFAULT_BIND)?
        .set_default("store.backend", "sled")?
        .set_default("auth.secure_cookie", false)?
        .set_default("logging.output", "stderr")
}
