//! JSON-RPC framework primitives consumed by the name commands.
//!
//! [`RawCommand`] is an inbound request whose parameters have not been
//! decoded yet. [`Request`] is the outbound envelope a command serialises
//! into. [`CommandTable`] binds method names to parsers, reply decoders, and
//! help text so a dispatcher can handle a request without knowing its
//! concrete command type.

mod table;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;

use crate::error::CommandError;

pub use self::table::{CommandBinding, CommandParser, CommandTable, ReplyDecoder};

/// Protocol version written into outbound requests.
pub const JSONRPC_VERSION: &str = "1.0";

/// Tracing target for registration and dispatch events.
pub(crate) const RPC_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::rpc");

/// An inbound request with undecoded positional parameters.
///
/// A missing or `null` `params` member is treated as an empty array. The `id`
/// is opaque and carried through unchanged.
///
/// # Example
///
/// ```
/// use nmcrpc::rpc::RawCommand;
///
/// let raw = RawCommand::from_slice(br#"{"method":"name_show","params":["d/x"],"id":7}"#)?;
/// assert_eq!(raw.method(), "name_show");
/// assert_eq!(raw.params().len(), 1);
/// # Ok::<(), nmcrpc::CommandError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommand {
    #[serde(default)]
    jsonrpc: Option<String>,
    method: String,
    #[serde(default)]
    id: Value,
    #[serde(default, deserialize_with = "params_or_empty")]
    params: Vec<Box<RawValue>>,
}

impl RawCommand {
    /// Creates a raw command from already-split parameters.
    #[must_use]
    pub fn new(id: Value, method: impl Into<String>, params: Vec<Box<RawValue>>) -> Self {
        Self {
            jsonrpc: None,
            method: method.into(),
            id,
            params,
        }
    }

    /// Creates a raw command from decoded JSON parameter values.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Encode`] if a value cannot be re-encoded.
    pub fn from_values(
        id: Value,
        method: impl Into<String>,
        values: &[Value],
    ) -> Result<Self, CommandError> {
        let params = values
            .iter()
            .map(serde_json::value::to_raw_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| CommandError::Encode { source })?;
        Ok(Self::new(id, method, params))
    }

    /// Parses a full JSON-RPC request object.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedRequest`] when the bytes are not a
    /// request object or `params` is not an array.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CommandError> {
        serde_json::from_slice(bytes).map_err(|source| CommandError::MalformedRequest { source })
    }

    /// Returns the protocol version named by the request, if any.
    #[must_use]
    pub fn jsonrpc(&self) -> Option<&str> {
        self.jsonrpc.as_deref()
    }

    /// Returns the method name.
    #[must_use]
    pub const fn method(&self) -> &str {
        self.method.as_str()
    }

    /// Returns the opaque request identifier.
    #[must_use]
    pub const fn id(&self) -> &Value {
        &self.id
    }

    /// Returns the undecoded parameters in order.
    #[must_use]
    pub const fn params(&self) -> &[Box<RawValue>] {
        self.params.as_slice()
    }

    /// Returns the undecoded parameter at `position`.
    #[must_use]
    pub fn param(&self, position: usize) -> Option<&RawValue> {
        self.params.get(position).map(AsRef::as_ref)
    }
}

fn params_or_empty<'de, D>(deserializer: D) -> Result<Vec<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Box<RawValue>>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Outbound JSON-RPC request envelope.
///
/// # Example
///
/// ```
/// use nmcrpc::rpc::Request;
/// use serde_json::json;
///
/// let request = Request::new(json!(1), "name_new", vec![json!("d/example")]);
/// let text = String::from_utf8(request.to_vec()?)?;
/// assert!(text.contains(r#""params":["d/example"]"#));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    jsonrpc: &'static str,
    method: String,
    params: Vec<Value>,
    id: Value,
}

impl Request {
    /// Creates an envelope for `method` carrying `params`.
    #[must_use]
    pub fn new(id: Value, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.into(),
            params,
            id,
        }
    }

    /// Returns the method name.
    #[must_use]
    pub const fn method(&self) -> &str {
        self.method.as_str()
    }

    /// Returns the positional parameters.
    #[must_use]
    pub const fn params(&self) -> &[Value] {
        self.params.as_slice()
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> &Value {
        &self.id
    }

    /// Encodes the envelope as JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Encode`] if serialisation fails.
    pub fn to_vec(&self) -> Result<Vec<u8>, CommandError> {
        serde_json::to_vec(self).map_err(|source| CommandError::Encode { source })
    }
}
