//! Layered configuration for the `nmcrpc` tools.
//!
//! Values are merged from built-in defaults, an optional TOML file named by
//! `--config-path` or `NMCRPC_CONFIG_PATH`, `NMCRPC_*` environment variables,
//! and command-line flags, with later layers taking precedence. Every field is
//! optional on disk; the built-in defaults form the lowest layer.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use self::defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_REQUEST_BYTES, default_log_filter, default_log_format,
    default_max_request_bytes,
};
pub use self::logging::{LogFormat, LogFormatParseError};

/// Command-line flags consumed by the configuration loader.
pub const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--max-request-bytes",
];

/// Resolved runtime configuration.
///
/// Every field carries a built-in default layer, so loading succeeds when no
/// file, environment variable, or flag sets a value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "NMCRPC")]
pub struct Config {
    /// Tracing filter expression, such as `info` or `nmcrpc=debug`.
    #[serde(default = "default_log_filter")]
    #[ortho_config(default = default_log_filter())]
    log_filter: String,
    /// Log output format: `json` or `compact`.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    log_format: LogFormat,
    /// Largest request or reply payload accepted, in bytes.
    #[serde(default = "default_max_request_bytes")]
    #[ortho_config(default = default_max_request_bytes())]
    max_request_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: default_log_format(),
            max_request_bytes: default_max_request_bytes(),
        }
    }
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub const fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the payload size limit in bytes.
    #[must_use]
    pub const fn max_request_bytes(&self) -> u64 {
        self.max_request_bytes
    }

    /// Overrides the tracing filter expression.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Overrides the log output format.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Overrides the payload size limit.
    #[must_use]
    pub const fn with_max_request_bytes(mut self, limit: u64) -> Self {
        self.max_request_bytes = limit;
        self
    }
}

#[cfg(test)]
mod tests;
