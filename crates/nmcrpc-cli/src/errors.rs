//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use nmcrpc::{CommandError, DispatchError, RegistryError};
use serde_json::Value;
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// JSON-RPC code reported when a payload exceeds the configured size limit.
pub(crate) const REQUEST_TOO_LARGE: i32 = -32001;

static NULL_ID: Value = Value::Null;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to register name commands: {0}")]
    Registration(#[from] RegistryError),
    #[error("failed to read {}: {source}", describe_input(.path.as_ref()))]
    ReadInput {
        path: Option<PathBuf>,
        source: io::Error,
    },
    #[error("request too large: exceeds {limit} bytes")]
    TooLarge { limit: u64 },
    #[error("{source}")]
    Dispatch { id: Value, source: DispatchError },
    #[error("unknown command '{0}'")]
    UnknownHelpTopic(String),
    #[error("failed to encode output: {0}")]
    Encode(#[source] CommandError),
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
}

impl AppError {
    /// Returns the JSON-RPC error code and request id for errors that map onto
    /// a protocol error reply.
    pub(crate) fn rpc_error(&self) -> Option<(i32, &Value)> {
        match self {
            Self::Dispatch { id, source } => Some((source.rpc_code(), id)),
            Self::TooLarge { .. } => Some((REQUEST_TOO_LARGE, &NULL_ID)),
            _ => None,
        }
    }
}

fn describe_input(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "standard input".to_owned(), |file| file.display().to_string())
}
