//! Configuration loading helpers for the CLI.
//!
//! Configuration flags must precede the subcommand. The leading run of
//! recognised flags is handed to `ortho_config`; everything from the first
//! other token onwards is parsed by clap.

use std::ffi::{OsStr, OsString};

use nmcrpc_config::{CONFIG_CLI_FLAGS, Config};
use ortho_config::OrthoConfig;

use crate::errors::AppError;

pub(crate) trait ConfigLoader {
    /// Loads configuration from the filtered configuration arguments.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Include { needs_value: bool },
    Stop,
}

fn classify(argument: &OsStr) -> FlagAction {
    let text = argument.to_string_lossy();
    if !text.starts_with("--") {
        return FlagAction::Stop;
    }
    let mut parts = text.splitn(2, '=');
    let flag = parts.next().unwrap_or_default();
    let has_inline_value = parts.next().is_some();
    if CONFIG_CLI_FLAGS.contains(&flag) {
        FlagAction::Include {
            needs_value: !has_inline_value,
        }
    } else {
        FlagAction::Stop
    }
}

/// Arguments split between the configuration loader and clap.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_arguments: Vec<OsString>,
}

pub(crate) fn split_arguments(args: Vec<OsString>) -> ArgumentSplit {
    let mut remaining = args.into_iter();
    let Some(program) = remaining.next() else {
        return ArgumentSplit::default();
    };

    let mut config_arguments = vec![program.clone()];
    let mut command_arguments = vec![program];
    let mut pending_value = false;

    for argument in remaining.by_ref() {
        if pending_value {
            config_arguments.push(argument);
            pending_value = false;
            continue;
        }
        match classify(&argument) {
            FlagAction::Include { needs_value } => {
                config_arguments.push(argument);
                pending_value = needs_value;
            }
            FlagAction::Stop => {
                command_arguments.push(argument);
                break;
            }
        }
    }
    command_arguments.extend(remaining);

    ArgumentSplit {
        config_arguments,
        command_arguments,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[rstest]
    #[case::separate_value("--log-filter", FlagAction::Include { needs_value: true })]
    #[case::inline_value("--log-format=compact", FlagAction::Include { needs_value: false })]
    #[case::subcommand("parse", FlagAction::Stop)]
    #[case::unknown_flag("--verbose", FlagAction::Stop)]
    fn classifies_flags(#[case] argument: &str, #[case] expected: FlagAction) {
        assert_eq!(classify(OsStr::new(argument)), expected);
    }

    #[test]
    fn leading_config_flags_are_split_off() {
        let split = split_arguments(os_args(&[
            "nmcrpc",
            "--log-filter",
            "debug",
            "--max-request-bytes=64",
            "reply",
            "name_new",
            "--log-filter",
        ]));
        assert_eq!(
            split.config_arguments,
            os_args(&["nmcrpc", "--log-filter", "debug", "--max-request-bytes=64"])
        );
        assert_eq!(
            split.command_arguments,
            os_args(&["nmcrpc", "reply", "name_new", "--log-filter"])
        );
    }

    #[test]
    fn loader_resolves_defaults_without_any_layer() {
        let config = OrthoConfigLoader
            .load(&os_args(&["nmcrpc"]))
            .expect("defaults load without file, environment or flags");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn empty_arguments_split_to_nothing() {
        assert_eq!(split_arguments(Vec::new()), ArgumentSplit::default());
    }
}
