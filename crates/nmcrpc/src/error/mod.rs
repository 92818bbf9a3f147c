//! Errors raised while decoding, encoding, and dispatching name commands.
//!
//! Every failure is detected synchronously and returned whole: there is no
//! partial decode. Each variant maps onto a JSON-RPC error code through
//! `rpc_code` so the transport can build the wire-level error reply without
//! inspecting the message text.

use thiserror::Error;

use crate::params::ParamKind;

/// Invalid JSON was received.
pub const PARSE_ERROR: i32 = -32700;
/// The JSON sent is not a valid request object.
pub const INVALID_REQUEST: i32 = -32600;
/// The method does not exist or is not registered.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid method parameters.
pub const INVALID_PARAMS: i32 = -32602;
/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i32 = -32603;

/// Errors arising from the positional parameter codec.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The parameter count falls outside the command's declared bounds.
    #[error("{method}: expected {min}..={max} parameters, got {actual}")]
    Arity {
        /// Method whose arity was violated.
        method: &'static str,
        /// Number of required parameters.
        min: usize,
        /// Number of required plus optional parameters.
        max: usize,
        /// Number of parameters supplied.
        actual: usize,
    },

    /// A parameter holds a JSON value of the wrong type.
    #[error("{method}: parameter {position} must be {expected}")]
    TypeMismatch {
        /// Method being decoded.
        method: &'static str,
        /// Zero-based parameter index.
        position: usize,
        /// Scalar type declared for the position.
        expected: ParamKind,
    },

    /// A reply payload does not match its record shape, or a parameter holds
    /// a number literal outside the range of a JSON value.
    #[error("{method}: malformed JSON{}: {source}", describe_position(.position))]
    Decode {
        /// Method being decoded.
        method: &'static str,
        /// Zero-based parameter index, absent for reply payloads.
        position: Option<usize>,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request envelope could not be parsed.
    #[error("malformed request: {source}")]
    MalformedRequest {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request names a different method than the decoder handles.
    #[error("expected method '{expected}', got '{actual}'")]
    MethodMismatch {
        /// Method the decoder handles.
        expected: &'static str,
        /// Method named by the request.
        actual: String,
    },

    /// The request could not be encoded.
    #[error("failed to encode request: {source}")]
    Encode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl CommandError {
    /// Returns the JSON-RPC error code the transport should reply with.
    #[must_use]
    pub const fn rpc_code(&self) -> i32 {
        match self {
            Self::Arity { .. } | Self::TypeMismatch { .. } => INVALID_PARAMS,
            Self::Decode { .. } | Self::MalformedRequest { .. } => PARSE_ERROR,
            Self::MethodMismatch { .. } => INVALID_REQUEST,
            Self::Encode { .. } => INTERNAL_ERROR,
        }
    }
}

fn describe_position(position: &Option<usize>) -> String {
    position.map_or_else(String::new, |index| format!(" at parameter {index}"))
}

/// Errors surfaced by the command table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A binding already exists for the method.
    #[error("command '{name}' is already registered")]
    Duplicate {
        /// Method that was registered twice.
        name: String,
    },

    /// No binding exists for the method.
    #[error("unknown command '{name}'")]
    UnknownMethod {
        /// Method that was looked up.
        name: String,
    },

    /// The method name is empty or whitespace.
    #[error("command name must not be empty")]
    InvalidName,
}

impl RegistryError {
    /// Returns the JSON-RPC error code the transport should reply with.
    #[must_use]
    pub const fn rpc_code(&self) -> i32 {
        match self {
            Self::UnknownMethod { .. } => METHOD_NOT_FOUND,
            Self::Duplicate { .. } | Self::InvalidName => INTERNAL_ERROR,
        }
    }
}

/// Errors raised while dispatching a request through the command table.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The table has no binding for the request.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The bound parser or reply decoder rejected the payload.
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl DispatchError {
    /// Returns the JSON-RPC error code the transport should reply with.
    #[must_use]
    pub const fn rpc_code(&self) -> i32 {
        match self {
            Self::Registry(error) => error.rpc_code(),
            Self::Command(error) => error.rpc_code(),
        }
    }
}
