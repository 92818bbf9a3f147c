//! Command-line host for the Namecoin name commands.
//!
//! The runtime loads layered configuration, installs telemetry, performs the
//! one-shot registration of the name commands into a fresh command table, and
//! then runs one subcommand:
//!
//! - `parse [FILE]` dispatches a JSON-RPC request through the table and prints
//!   the canonical re-encoded request.
//! - `reply <METHOD> [FILE]` decodes a reply payload and prints the typed
//!   result as JSON.
//! - `help [METHOD]` prints usage for one method or lists them all.
//!
//! Failures that correspond to a JSON-RPC error are also written to standard
//! output as an error reply so callers can consume them mechanically.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use nmcrpc::{CommandError, DispatchError, NameCommandTable, RawCommand, name_command_table};
use nmcrpc_config::Config;
use serde_json::{Value, json};
use tracing::{debug, warn};

mod cli;
mod config;
mod errors;
mod input;
pub mod telemetry;

use cli::{Cli, CliCommand};
use config::{ConfigLoader, OrthoConfigLoader, split_arguments};
use errors::AppError;
use input::read_payload;

const CLI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::run");

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdin, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, R, W, E, L>(
    args: I,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let split = split_arguments(args.into_iter().collect());
    let cli = match Cli::try_parse_from(split.command_arguments) {
        Ok(cli) => cli,
        Err(error) if is_informational(&error) => {
            return match write!(stdout, "{error}") {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(error) => return fail(&AppError::CliUsage(error), stdout, stderr),
    };

    let result = loader
        .load(&split.config_arguments)
        .and_then(|config| {
            telemetry::initialise(&config)?;
            let table = name_command_table()?;
            execute(cli.command, &config, &table, stdin, stdout)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(&error, stdout, stderr),
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

fn execute<R, W>(
    command: CliCommand,
    config: &Config,
    table: &NameCommandTable,
    stdin: &mut R,
    stdout: &mut W,
) -> Result<(), AppError>
where
    R: Read,
    W: Write,
{
    match command {
        CliCommand::Parse { file } => {
            let bytes = read_payload(file.as_deref(), stdin, config.max_request_bytes())?;
            let raw = RawCommand::from_slice(&bytes).map_err(|source| AppError::Dispatch {
                id: Value::Null,
                source: DispatchError::from(source),
            })?;
            let parsed = table.parse(&raw).map_err(|source| AppError::Dispatch {
                id: raw.id().clone(),
                source,
            })?;
            debug!(target: CLI_TARGET, method = parsed.method(), "request parsed");
            let encoded = parsed.to_json().map_err(AppError::Encode)?;
            write_line(stdout, &encoded)
        }
        CliCommand::Reply { method, file } => {
            let bytes = read_payload(file.as_deref(), stdin, config.max_request_bytes())?;
            let reply = table
                .decode_reply(&method, &bytes)
                .map_err(|source| AppError::Dispatch {
                    id: Value::Null,
                    source,
                })?;
            let encoded = serde_json::to_vec(&reply)
                .map_err(|source| AppError::Encode(CommandError::Encode { source }))?;
            write_line(stdout, &encoded)
        }
        CliCommand::Help { method: Some(method) } => {
            let text = table
                .help(&method)
                .ok_or_else(|| AppError::UnknownHelpTopic(method.clone()))?;
            write_line(stdout, text.as_bytes())
        }
        CliCommand::Help { method: None } => {
            for method in table.methods() {
                write_line(stdout, method.as_bytes())?;
            }
            Ok(())
        }
    }
}

fn write_line<W: Write>(stdout: &mut W, bytes: &[u8]) -> Result<(), AppError> {
    stdout
        .write_all(bytes)
        .and_then(|()| stdout.write_all(b"\n"))
        .and_then(|()| stdout.flush())
        .map_err(AppError::WriteOutput)
}

fn fail<W: Write, E: Write>(error: &AppError, stdout: &mut W, stderr: &mut E) -> ExitCode {
    // The exit code is the only channel left if the streams fail.
    drop(report(error, stdout, stderr));
    ExitCode::FAILURE
}

fn report<W: Write, E: Write>(error: &AppError, stdout: &mut W, stderr: &mut E) -> io::Result<()> {
    if let Some((code, id)) = error.rpc_error() {
        warn!(target: CLI_TARGET, code, %error, "request rejected");
        let reply = json!({
            "result": null,
            "error": { "code": code, "message": error.to_string() },
            "id": id,
        });
        writeln!(stdout, "{reply}")?;
    }
    writeln!(stderr, "{error}")
}
