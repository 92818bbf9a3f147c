//! Command-line grammar.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "nmcrpc",
    about = "Decode and re-encode Namecoin name_* JSON-RPC payloads",
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CliCommand {
    /// Parses a JSON-RPC request and prints its canonical encoding.
    Parse {
        /// Request file; standard input when omitted.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Decodes a reply payload with the decoder bound to METHOD.
    Reply {
        /// Method the reply answers, such as `name_show`.
        #[arg(value_name = "METHOD")]
        method: String,
        /// Reply file; standard input when omitted.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Prints usage for METHOD, or lists every registered method.
    Help {
        /// Method to describe.
        #[arg(value_name = "METHOD")]
        method: Option<String>,
    },
}
