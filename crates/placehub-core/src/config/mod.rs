//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote item store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Notification channel settings.
    #[serde(default)]
    pub notices: NoticeConfig,
}

/// Transient notification channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// Capacity of the notice broadcast channel. Slow subscribers lag
    /// and skip older notices once this many are queued.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the base file at `path` (optional) with a `config/{env}`
    /// overlay and environment variables prefixed with `PLACEHUB__`.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let base = path.strip_suffix(".toml").unwrap_or(path);

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PLACEHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_buffer_size() -> usize {
    64
}
