use cadastro_domain::constants::ENV_PREFIX;
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[cadastro_derive::cadastro_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering environment overrides on top of a file.
///
/// 1. **Base File**: settings from `path` (format picked by extension; `server` when `None`).
/// 2. **Environment Overrides**: variables prefixed with `CADASTRO__`. Nested keys use
///    double underscores (`CADASTRO__CASING__SWEEP_INTERVAL_MS` maps to `casing.sweep_interval_ms`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use cadastro_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Shared body of [`load_config`]. `env` replaces the process environment when set.
fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    // Env values arrive as strings; `try_parsing` lets them reach numeric and bool fields
    // through the flattened `ApiConfig`.
    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("casing.extra_preserve_fragments")
                .source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
