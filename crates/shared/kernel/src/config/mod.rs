use config::{Config, Environment, File};
use lectio_domain::constants::{CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[lectio_derive::lectio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering an optional file under environment overrides.
///
/// 1. **Base File**: `path` (default `server`); the extension is resolved by the
///    `config` crate, so `server` finds `server.toml`. A missing file is not an error,
///    every field has a default.
/// 2. **Environment Overrides**: variables prefixed with `LECTIO__`, nested with
///    double underscores (`LECTIO__UPSTREAM__TIMEOUT_SECS=5` maps to `upstream.timeout_secs`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file exists but cannot be parsed, or the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use lectio_kernel::config::load_config;
/// use lectio_kernel::domain::config::ApiConfig;
///
/// let cfg: ApiConfig = load_config(Some("does-not-exist")).unwrap();
/// assert_eq!(cfg.server.port, 4583);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
