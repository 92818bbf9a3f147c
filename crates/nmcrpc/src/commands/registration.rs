//! Commands that register or modify a name.

use serde_json::Value;

use super::NameCommand;
use crate::error::CommandError;
use crate::params::{Arity, ParamReader, ParamWriter};
use crate::replies::{NameFirstUpdateResult, NameNewResult, NameUpdateResult};

/// Reserves a name by committing to its salted hash.
///
/// Wire shape: `[name]`.
///
/// # Example
///
/// ```
/// use nmcrpc::commands::{NameCommand, NewName};
/// use serde_json::json;
///
/// let command = NewName::new(json!(1), "d/example");
/// assert_eq!(command.params(), vec![json!("d/example")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewName {
    id: Value,
    name: String,
}

impl NewName {
    /// Creates the command.
    #[must_use]
    pub fn new(id: Value, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the name being reserved.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl NameCommand for NewName {
    const METHOD: &'static str = "name_new";
    const ARITY: Arity = Arity::new(1, 0);
    type Reply = NameNewResult;

    fn id(&self) -> &Value {
        &self.id
    }

    fn read_params(id: Value, reader: &ParamReader<'_>) -> Result<Self, CommandError> {
        Ok(Self {
            id,
            name: reader.required(0)?,
        })
    }

    fn params(&self) -> Vec<Value> {
        ParamWriter::new().required(&self.name).finish()
    }
}

/// Updates the value of a registered name, optionally transferring it.
///
/// Wire shape: `[name, value, [toaddress]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateName {
    id: Value,
    name: String,
    value: String,
    to_address: String,
}

impl UpdateName {
    /// Creates the command without a transfer address.
    #[must_use]
    pub fn new(id: Value, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
            to_address: String::new(),
        }
    }

    /// Sets the address the name is transferred to.
    #[must_use]
    pub fn with_to_address(mut self, to_address: impl Into<String>) -> Self {
        self.to_address = to_address.into();
        self
    }

    /// Returns the name being updated.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the new value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the transfer address, empty when unset.
    #[must_use]
    pub const fn to_address(&self) -> &str {
        self.to_address.as_str()
    }
}

impl NameCommand for UpdateName {
    const METHOD: &'static str = "name_update";
    const ARITY: Arity = Arity::new(2, 1);
    type Reply = NameUpdateResult;

    fn id(&self) -> &Value {
        &self.id
    }

    fn read_params(id: Value, reader: &ParamReader<'_>) -> Result<Self, CommandError> {
        Ok(Self {
            id,
            name: reader.required(0)?,
            value: reader.required(1)?,
            to_address: reader.optional(2)?,
        })
    }

    fn params(&self) -> Vec<Value> {
        ParamWriter::new()
            .required(&self.name)
            .required(&self.value)
            .optional(&self.to_address)
            .finish()
    }
}

/// Publishes the first value of a name reserved with `name_new`.
///
/// Wire shape: `[name, rand, value, [txid], [toaddress]]`.
///
/// # Example
///
/// ```
/// use nmcrpc::commands::{FirstUpdateName, NameCommand};
/// use serde_json::json;
///
/// let command = FirstUpdateName::new(json!(1), "d/example", "a1b2", "{}")
///     .with_to_address("NAddr");
/// assert_eq!(
///     command.params(),
///     vec![json!("d/example"), json!("a1b2"), json!("{}"), json!(""), json!("NAddr")]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstUpdateName {
    id: Value,
    name: String,
    rand: String,
    value: String,
    txid: String,
    to_address: String,
}

impl FirstUpdateName {
    /// Creates the command with the reservation salt and the initial value.
    #[must_use]
    pub fn new(
        id: Value,
        name: impl Into<String>,
        rand: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rand: rand.into(),
            value: value.into(),
            txid: String::new(),
            to_address: String::new(),
        }
    }

    /// Sets the id of the `name_new` transaction.
    #[must_use]
    pub fn with_txid(mut self, txid: impl Into<String>) -> Self {
        self.txid = txid.into();
        self
    }

    /// Sets the address the name is transferred to.
    #[must_use]
    pub fn with_to_address(mut self, to_address: impl Into<String>) -> Self {
        self.to_address = to_address.into();
        self
    }

    /// Returns the name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the reservation salt.
    #[must_use]
    pub const fn rand(&self) -> &str {
        self.rand.as_str()
    }

    /// Returns the initial value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the `name_new` transaction id, empty when unset.
    #[must_use]
    pub const fn txid(&self) -> &str {
        self.txid.as_str()
    }

    /// Returns the transfer address, empty when unset.
    #[must_use]
    pub const fn to_address(&self) -> &str {
        self.to_address.as_str()
    }
}

impl NameCommand for FirstUpdateName {
    const METHOD: &'static str = "name_firstupdate";
    const ARITY: Arity = Arity::new(3, 2);
    type Reply = NameFirstUpdateResult;

    fn id(&self) -> &Value {
        &self.id
    }

    fn read_params(id: Value, reader: &ParamReader<'_>) -> Result<Self, CommandError> {
        Ok(Self {
            id,
            name: reader.required(0)?,
            rand: reader.required(1)?,
            value: reader.required(2)?,
            txid: reader.optional(3)?,
            to_address: reader.optional(4)?,
        })
    }

    fn params(&self) -> Vec<Value> {
        ParamWriter::new()
            .required(&self.name)
            .required(&self.rand)
            .required(&self.value)
            .optional(&self.txid)
            .optional(&self.to_address)
            .finish()
    }
}
