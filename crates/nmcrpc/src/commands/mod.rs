//! Typed name commands and their positional parameter codec.
//!
//! Each command is a plain struct holding its request id, its required
//! fields, and its optional fields at their zero value until a `with_*`
//! setter supplies them. The [`NameCommand`] trait supplies the shared
//! decode and encode entry points on top of each command's parameter layout,
//! and [`Command`] tags the eight structs so a dispatcher can hold any of
//! them.

mod queries;
mod registration;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::error::CommandError;
use crate::params::{Arity, ParamReader};
use crate::replies;
use crate::rpc::{RawCommand, Request};

pub use self::queries::{FilterNames, ListNames, NameHistory, ScanNames, ShowName};
pub use self::registration::{FirstUpdateName, NewName, UpdateName};

const CODEC_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::codec");

/// Shared behaviour of every name command.
///
/// Implementors describe their method name, their [`Arity`], how to read
/// their fields from a [`ParamReader`], and how to write them back as a
/// positional array. The provided methods build the request-level operations
/// on top of those four pieces.
pub trait NameCommand: Sized {
    /// JSON-RPC method name.
    const METHOD: &'static str;

    /// Required and optional parameter counts.
    const ARITY: Arity;

    /// Typed result decoded from the reply payload.
    type Reply: DeserializeOwned;

    /// Returns the opaque request identifier.
    fn id(&self) -> &Value;

    /// Builds the command from a reader whose length already satisfies
    /// [`Self::ARITY`].
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Decode`] or [`CommandError::TypeMismatch`]
    /// when a position cannot be decoded.
    fn read_params(id: Value, reader: &ParamReader<'_>) -> Result<Self, CommandError>;

    /// Returns the canonical positional parameter array.
    #[must_use]
    fn params(&self) -> Vec<Value>;

    /// Decodes a command from a raw request.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MethodMismatch`] when the request names a
    /// different method, [`CommandError::Arity`] when the parameter count is
    /// out of bounds, and the reader's errors otherwise.
    fn from_raw(raw: &RawCommand) -> Result<Self, CommandError> {
        if raw.method() != Self::METHOD {
            return Err(CommandError::MethodMismatch {
                expected: Self::METHOD,
                actual: raw.method().to_owned(),
            });
        }
        let reader = ParamReader::new(Self::METHOD, raw.params(), Self::ARITY)?;
        debug!(
            target: CODEC_TARGET,
            method = Self::METHOD,
            params = reader.len(),
            "decoding parameters"
        );
        Self::read_params(raw.id().clone(), &reader)
    }

    /// Decodes a command from the bytes of a full request object.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedRequest`] when the bytes are not a
    /// request object, and the errors of [`NameCommand::from_raw`] otherwise.
    fn from_json(bytes: &[u8]) -> Result<Self, CommandError> {
        let raw = RawCommand::from_slice(bytes)?;
        Self::from_raw(&raw)
    }

    /// Wraps the parameters in a request envelope.
    #[must_use]
    fn to_request(&self) -> Request {
        Request::new(self.id().clone(), Self::METHOD, self.params())
    }

    /// Encodes the full request object.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Encode`] if serialisation fails.
    fn to_json(&self) -> Result<Vec<u8>, CommandError> {
        self.to_request().to_vec()
    }

    /// Decodes this command's reply payload.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Decode`] when the payload does not match the
    /// reply shape.
    fn decode_reply(bytes: &[u8]) -> Result<Self::Reply, CommandError> {
        replies::decode(Self::METHOD, bytes)
    }
}

/// Any of the eight name commands.
///
/// Serialises as the full request object.
///
/// # Example
///
/// ```
/// use nmcrpc::commands::{Command, ScanNames};
/// use serde_json::json;
///
/// let command = Command::from(ScanNames::new(json!(1)).with_max_returned(25));
/// assert_eq!(command.method(), "name_scan");
/// assert_eq!(command.params(), vec![json!(""), json!(25)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `name_new`.
    New(NewName),
    /// `name_update`.
    Update(UpdateName),
    /// `name_firstupdate`.
    FirstUpdate(FirstUpdateName),
    /// `name_show`.
    Show(ShowName),
    /// `name_list`.
    List(ListNames),
    /// `name_history`.
    History(NameHistory),
    /// `name_scan`.
    Scan(ScanNames),
    /// `name_filter`.
    Filter(FilterNames),
}

impl Command {
    /// Returns the JSON-RPC method name.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::New(_) => NewName::METHOD,
            Self::Update(_) => UpdateName::METHOD,
            Self::FirstUpdate(_) => FirstUpdateName::METHOD,
            Self::Show(_) => ShowName::METHOD,
            Self::List(_) => ListNames::METHOD,
            Self::History(_) => NameHistory::METHOD,
            Self::Scan(_) => ScanNames::METHOD,
            Self::Filter(_) => FilterNames::METHOD,
        }
    }

    /// Returns the opaque request identifier.
    #[must_use]
    pub fn id(&self) -> &Value {
        match self {
            Self::New(command) => command.id(),
            Self::Update(command) => command.id(),
            Self::FirstUpdate(command) => command.id(),
            Self::Show(command) => command.id(),
            Self::List(command) => command.id(),
            Self::History(command) => command.id(),
            Self::Scan(command) => command.id(),
            Self::Filter(command) => command.id(),
        }
    }

    /// Returns the canonical positional parameter array.
    #[must_use]
    pub fn params(&self) -> Vec<Value> {
        match self {
            Self::New(command) => command.params(),
            Self::Update(command) => command.params(),
            Self::FirstUpdate(command) => command.params(),
            Self::Show(command) => command.params(),
            Self::List(command) => command.params(),
            Self::History(command) => command.params(),
            Self::Scan(command) => command.params(),
            Self::Filter(command) => command.params(),
        }
    }

    /// Wraps the parameters in a request envelope.
    #[must_use]
    pub fn to_request(&self) -> Request {
        Request::new(self.id().clone(), self.method(), self.params())
    }

    /// Encodes the full request object.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Encode`] if serialisation fails.
    pub fn to_json(&self) -> Result<Vec<u8>, CommandError> {
        self.to_request().to_vec()
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_request().serialize(serializer)
    }
}

macro_rules! impl_from_command {
    ($($variant:ident => $command:ty),+ $(,)?) => {
        $(
            impl From<$command> for Command {
                fn from(command: $command) -> Self {
                    Self::$variant(command)
                }
            }
        )+
    };
}

impl_from_command! {
    New => NewName,
    Update => UpdateName,
    FirstUpdate => FirstUpdateName,
    Show => ShowName,
    List => ListNames,
    History => NameHistory,
    Scan => ScanNames,
    Filter => FilterNames,
}

/// Parses a raw request as `C` and tags the result.
///
/// Instantiated once per command as the parser bound in the command table.
///
/// # Errors
///
/// Returns the errors of [`NameCommand::from_raw`].
pub fn parse_command<C>(raw: &RawCommand) -> Result<Command, CommandError>
where
    C: NameCommand + Into<Command>,
{
    C::from_raw(raw).map(Into::into)
}

#[cfg(test)]
mod tests;
