//! Unit tests for configuration defaults and overrides.

use std::str::FromStr;

use rstest::rstest;

use super::*;

#[test]
fn defaults_are_resolved_when_unset() {
    let config = Config::default();
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_format(), LogFormat::Json);
    assert_eq!(config.max_request_bytes(), 1_048_576);
}

#[test]
fn overrides_replace_defaults() {
    let config = Config::default()
        .with_log_filter("nmcrpc=debug")
        .with_log_format(LogFormat::Compact)
        .with_max_request_bytes(64);
    assert_eq!(config.log_filter(), "nmcrpc=debug");
    assert_eq!(config.log_format(), LogFormat::Compact);
    assert_eq!(config.max_request_bytes(), 64);
}

#[rstest]
#[case::lowercase("json", LogFormat::Json)]
#[case::uppercase("COMPACT", LogFormat::Compact)]
fn log_format_parses_case_insensitively(#[case] text: &str, #[case] expected: LogFormat) {
    assert_eq!(LogFormat::from_str(text).expect("parse"), expected);
}

#[test]
fn log_format_rejects_unknown_names() {
    assert!(LogFormat::from_str("pretty").is_err());
}

#[test]
fn log_format_displays_in_snake_case() {
    assert_eq!(LogFormat::Compact.to_string(), "compact");
}
