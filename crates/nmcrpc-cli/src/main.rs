//! CLI entrypoint for the `nmcrpc` tool.
//!
//! The binary delegates to [`nmcrpc_cli::run`], which loads configuration,
//! installs telemetry, registers the name commands, and runs the requested
//! subcommand against standard input and output.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    nmcrpc_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
