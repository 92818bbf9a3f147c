//! Result records returned by the name commands.
//!
//! Field names follow the daemon's JSON exactly. Any field the daemon leaves
//! out of a name record decodes to its zero value.

use serde::{Deserialize, Serialize};

/// Reply to `name_new`: the reservation transaction and its salt.
///
/// The daemon sends a two-element string array, `[txid, rand]`.
///
/// # Example
///
/// ```
/// use nmcrpc::replies::NameNewResult;
///
/// let result: NameNewResult = serde_json::from_str(r#"["txid123","randABC"]"#)?;
/// assert_eq!(result.txid, "txid123");
/// assert_eq!(result.rand, "randABC");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)")]
pub struct NameNewResult {
    /// Id of the reservation transaction.
    pub txid: String,
    /// Salt needed by the matching `name_firstupdate`.
    pub rand: String,
}

impl From<(String, String)> for NameNewResult {
    fn from((txid, rand): (String, String)) -> Self {
        Self { txid, rand }
    }
}

/// Reply to `name_update`: the transaction id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameUpdateResult(pub String);

/// Reply to `name_firstupdate`: the transaction id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameFirstUpdateResult(pub String);

/// Reply to `name_show`, and one entry of a `name_history` reply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameShowResult {
    /// The name.
    pub name: String,
    /// The current value.
    pub value: String,
    /// Transaction that set the value.
    pub txid: String,
    /// Output index of the name within the transaction.
    pub vout: u32,
    /// Address holding the name.
    pub address: String,
    /// Block height of the transaction.
    pub height: i64,
    /// Blocks until the name expires.
    pub expires_in: i64,
    /// Whether the name has expired.
    pub expired: bool,
}

/// One entry of a `name_history` reply.
pub type NameHistoryResult = NameShowResult;

/// One entry of a `name_list` reply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameListResult {
    /// The name.
    pub name: String,
    /// The current value.
    pub value: String,
    /// Transaction that set the value.
    pub txid: String,
    /// Output index of the name within the transaction.
    pub vout: u32,
    /// Address holding the name.
    pub address: String,
    /// Block height of the transaction.
    pub height: i64,
    /// Blocks until the name expires.
    pub expires_in: i64,
    /// Whether the name has expired.
    pub expired: bool,
    /// Whether the name has left the wallet.
    pub transferred: bool,
}

/// One entry of a `name_scan` reply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameScanResult {
    /// The name.
    pub name: String,
    /// The current value.
    pub value: String,
    /// Transaction that set the value.
    pub txid: String,
    /// Output index of the name within the transaction.
    pub vout: u32,
    /// Address holding the name.
    pub address: String,
    /// Block height of the transaction.
    pub height: i64,
    /// Blocks until the name expires.
    pub expires_in: i64,
    /// Whether the name has expired.
    pub expired: bool,
}

/// One entry of a `name_filter` reply.
pub type NameFilterResult = NameScanResult;
