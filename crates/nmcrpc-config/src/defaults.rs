//! Built-in configuration defaults.

use crate::logging::LogFormat;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Largest request or reply payload accepted by default, in bytes.
pub const DEFAULT_MAX_REQUEST_BYTES: u64 = 1024 * 1024;

/// Default log filter expression as an owned value.
#[must_use]
pub fn default_log_filter() -> String {
    String::from(DEFAULT_LOG_FILTER)
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default payload size limit in bytes.
#[must_use]
pub const fn default_max_request_bytes() -> u64 {
    DEFAULT_MAX_REQUEST_BYTES
}
