//! Read-only commands that inspect names.

use serde_json::Value;

use super::NameCommand;
use crate::error::CommandError;
use crate::params::{Arity, ParamReader, ParamWriter};
use crate::replies::{
    NameFilterResult, NameHistoryResult, NameListResult, NameScanResult, NameShowResult,
};

/// Shows the current value of a name.
///
/// Wire shape: `[name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowName {
    id: Value,
    name: String,
}

impl ShowName {
    /// Creates the command.
    #[must_use]
    pub fn new(id: Value, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the name being shown.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl NameCommand for ShowName {
    const METHOD: &'static str = "name_show";
    const ARITY: Arity = Arity::new(1, 0);
    type Reply = NameShowResult;

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

/// Lists the names held by the wallet.
///
/// Wire shape: `[[identifier]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNames {
    id: Value,
    identifier: String,
}

impl ListNames {
    /// Creates the command listing every wallet name.
    #[must_use]
    pub const fn new(id: Value) -> Self {
        Self {
            id,
            identifier: String::new(),
        }
    }

    /// Restricts the listing to one name.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Returns the name filter, empty when unset.
    #[must_use]
    pub const fn identifier(&self) -> &str {
        self.identifier.as_str()
    }
}

impl NameCommand for ListNames {
    const METHOD: &'static str = "name_list";
    const ARITY: Arity = Arity::new(0, 1);
    type Reply = Vec<NameListResult>;

    fn id(&self) -> &Value {
        &self.id
    }

    fn read_params(id: Value, reader: &ParamReader<'_>) -> Result<Self, CommandError> {
        Ok(Self {
            id,
            identifier: reader.optional(0)?,
        })
    }

    fn params(&self) -> Vec<Value> {
        ParamWriter::new().optional(&self.identifier).finish()
    }
}

/// Lists every value a name has held.
///
/// Wire shape: `[name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameHistory {
    id: Value,
    name: String,
}

impl NameHistory {
    /// Creates the command.
    #[must_use]
    pub fn new(id: Value, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the name whose history is requested.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl NameCommand for NameHistory {
    const METHOD: &'static str = "name_history";
    const ARITY: Arity = Arity::new(1, 0);
    type Reply = Vec<NameHistoryResult>;

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

/// Walks the name index in order.
///
/// Wire shape: `[[start-name], [max-returned]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanNames {
    id: Value,
    start_name: String,
    max_returned: i64,
}

impl ScanNames {
    /// Creates the command with the server's default start and page size.
    #[must_use]
    pub const fn new(id: Value) -> Self {
        Self {
            id,
            start_name: String::new(),
            max_returned: 0,
        }
    }

    /// Sets the name the scan starts from.
    #[must_use]
    pub fn with_start_name(mut self, start_name: impl Into<String>) -> Self {
        self.start_name = start_name.into();
        self
    }

    /// Sets the maximum number of entries returned.
    #[must_use]
    pub const fn with_max_returned(mut self, max_returned: i64) -> Self {
        self.max_returned = max_returned;
        self
    }

    /// Returns the start name, empty when unset.
    #[must_use]
    pub const fn start_name(&self) -> &str {
        self.start_name.as_str()
    }

    /// Returns the entry limit, zero when unset.
    #[must_use]
    pub const fn max_returned(&self) -> i64 {
        self.max_returned
    }
}

impl NameCommand for ScanNames {
    const METHOD: &'static str = "name_scan";
    const ARITY: Arity = Arity::new(0, 2);
    type Reply = Vec<NameScanResult>;

    fn id(&self) -> &Value {
        &self.id
    }

    fn read_params(id: Value, reader: &ParamReader<'_>) -> Result<Self, CommandError> {
        Ok(Self {
            id,
            start_name: reader.optional(0)?,
            max_returned: reader.optional(1)?,
        })
    }

    fn params(&self) -> Vec<Value> {
        ParamWriter::new()
            .optional(&self.start_name)
            .optional(&self.max_returned)
            .finish()
    }
}

/// Scans names matching a regular expression.
///
/// Wire shape: `[[regexp], [maxage], [from], [nb], [stat]]`. With nothing set
/// the array is empty and the server applies its own defaults.
///
/// # Example
///
/// ```
/// use nmcrpc::commands::{FilterNames, NameCommand};
/// use serde_json::json;
///
/// assert!(FilterNames::new(json!(1)).params().is_empty());
///
/// let command = FilterNames::new(json!(1)).with_regexp("^d/").with_nb(10);
/// assert_eq!(
///     command.params(),
///     vec![json!("^d/"), json!(0), json!(0), json!(10)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterNames {
    id: Value,
    regexp: String,
    max_age: i64,
    offset: i64,
    nb: i64,
    stat: i64,
}

impl FilterNames {
    /// Creates the command with every filter at its default.
    #[must_use]
    pub const fn new(id: Value) -> Self {
        Self {
            id,
            regexp: String::new(),
            max_age: 0,
            offset: 0,
            nb: 0,
            stat: 0,
        }
    }

    /// Sets the pattern applied to names.
    #[must_use]
    pub fn with_regexp(mut self, regexp: impl Into<String>) -> Self {
        self.regexp = regexp.into();
        self
    }

    /// Limits the scan to the last `max_age` blocks.
    #[must_use]
    pub const fn with_max_age(mut self, max_age: i64) -> Self {
        self.max_age = max_age;
        self
    }

    /// Skips results before index `offset`, sent as `from`.
    #[must_use]
    pub const fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Caps the number of results, zero meaning all.
    #[must_use]
    pub const fn with_nb(mut self, nb: i64) -> Self {
        self.nb = nb;
        self
    }

    /// Requests statistics instead of results when non-zero.
    #[must_use]
    pub const fn with_stat(mut self, stat: i64) -> Self {
        self.stat = stat;
        self
    }

    /// Returns the pattern, empty when unset.
    #[must_use]
    pub const fn regexp(&self) -> &str {
        self.regexp.as_str()
    }

    /// Returns the block age limit, zero when unset.
    #[must_use]
    pub const fn max_age(&self) -> i64 {
        self.max_age
    }

    /// Returns the result offset.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Returns the result cap.
    #[must_use]
    pub const fn nb(&self) -> i64 {
        self.nb
    }

    /// Returns the statistics flag.
    #[must_use]
    pub const fn stat(&self) -> i64 {
        self.stat
    }
}

impl NameCommand for FilterNames {
    const METHOD: &'static str = "name_filter";
    const ARITY: Arity = Arity::new(0, 5);
    type Reply = Vec<NameFilterResult>;

    fn id(&self) -> &Value {
        &self.id
    }

    fn read_params(id: Value, reader: &ParamReader<'_>) -> Result<Self, CommandError> {
        Ok(Self {
            id,
            regexp: reader.optional(0)?,
            max_age: reader.optional(1)?,
            offset: reader.optional(2)?,
            nb: reader.optional(3)?,
            stat: reader.optional(4)?,
        })
    }

    fn params(&self) -> Vec<Value> {
        ParamWriter::new()
            .optional(&self.regexp)
            .optional(&self.max_age)
            .optional(&self.offset)
            .optional(&self.nb)
            .optional(&self.stat)
            .finish()
    }
}
