//! Environment variable source: VOICEDIR__ prefix with __ separator, plus the
//! conventional ADMIN_PASSWORD and VAPI_PUBLIC_KEY variables.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENV_PREFIX: &str = "VOICEDIR";

/// Add environment variable overlay to builder.
///
/// `VOICEDIR__AUTH__ADMIN_PASSWORD` maps to `auth.admin_password`. Values stay
/// strings so secrets like `0123` are not reinterpreted as numbers.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    );
    let builder = builder
        .set_override_option("auth.admin_password", non_empty_var("ADMIN_PASSWORD"))?
        .set_override_option("widget.public_key", non_empty_var("VAPI_PUBLIC_KEY"))?;
    Ok(builder)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
