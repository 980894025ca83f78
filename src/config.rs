//! # Tool Configuration
//!
//! Settings for the binaries, loaded from environment variables.
//! Command-line flags take precedence over these.

use crate::constants::{
    DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FORMAT, DEFAULT_WATCH_TIMEOUT_SECS,
    IMAGE_REGISTRY_RESOURCE_NAME,
};
use crate::document::Format;

/// Configuration shared by `irctl` and `crdgen`
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level or filter directive (`LOG_LEVEL`), `RUST_LOG` wins when set
    pub log_level: String,
    /// Log format, text or json (`LOG_FORMAT`)
    pub log_format: String,
    /// Format for printed documents (`OUTPUT_FORMAT`)
    pub output_format: Format,
    /// Name of the Config to read when none is given (`IMAGE_REGISTRY_RESOURCE`)
    pub resource_name: String,
    /// Server-side timeout for each watch request (`WATCH_TIMEOUT_SECS`)
    pub watch_timeout_secs: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.parse().unwrap_or_default(),
            resource_name: IMAGE_REGISTRY_RESOURCE_NAME.to_string(),
            watch_timeout_secs: DEFAULT_WATCH_TIMEOUT_SECS,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: var_or_default_str(&lookup, "LOG_LEVEL", &defaults.log_level),
            log_format: var_or_default_str(&lookup, "LOG_FORMAT", &defaults.log_format)
                .to_lowercase(),
            output_format: var_or_default(&lookup, "OUTPUT_FORMAT", defaults.output_format),
            resource_name: var_or_default_str(
                &lookup,
                "IMAGE_REGISTRY_RESOURCE",
                &defaults.resource_name,
            ),
            watch_timeout_secs: var_or_default(
                &lookup,
                "WATCH_TIMEOUT_SECS",
                defaults.watch_timeout_secs,
            ),
        }
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

/// Read a variable and parse it, falling back to the default when unset or invalid
fn var_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a variable as a string or return the default
fn var_or_default_str<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
