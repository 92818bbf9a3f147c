//! Reply decoding for the name commands.
//!
//! [`decode`] turns a reply payload into any of the result records
//! re-exported here. The `decode_name_*_reply` functions wrap it per method
//! and tag the outcome as a [`NameReply`], which is the shape bound into the
//! command table.

mod results;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::commands::{
    FilterNames, FirstUpdateName, ListNames, NameCommand, NameHistory, NewName, ScanNames,
    ShowName, UpdateName,
};
use crate::error::CommandError;

pub use self::results::{
    NameFilterResult, NameFirstUpdateResult, NameHistoryResult, NameListResult, NameNewResult,
    NameScanResult, NameShowResult, NameUpdateResult,
};

/// Decodes a reply payload for `method`.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] without a position when the payload does
/// not match `T`.
pub fn decode<T>(method: &'static str, bytes: &[u8]) -> Result<T, CommandError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|source| CommandError::Decode {
        method,
        position: None,
        source,
    })
}

/// A decoded reply to any name command.
///
/// Serialises as the bare result, without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NameReply {
    /// Reply to `name_new`.
    New(NameNewResult),
    /// Reply to `name_update`.
    Update(NameUpdateResult),
    /// Reply to `name_firstupdate`.
    FirstUpdate(NameFirstUpdateResult),
    /// Reply to `name_show`.
    Show(NameShowResult),
    /// Reply to `name_list`.
    List(Vec<NameListResult>),
    /// Reply to `name_history`.
    History(Vec<NameHistoryResult>),
    /// Reply to `name_scan`.
    Scan(Vec<NameScanResult>),
    /// Reply to `name_filter`.
    Filter(Vec<NameFilterResult>),
}

impl NameReply {
    /// Returns the method the reply answers.
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
}

/// Decodes a `name_new` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is exactly two strings.
pub fn decode_name_new_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    NewName::decode_reply(bytes).map(NameReply::New)
}

/// Decodes a `name_update` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is a string.
pub fn decode_name_update_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    UpdateName::decode_reply(bytes).map(NameReply::Update)
}

/// Decodes a `name_firstupdate` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is a string.
pub fn decode_name_firstupdate_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    FirstUpdateName::decode_reply(bytes).map(NameReply::FirstUpdate)
}

/// Decodes a `name_show` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is a name record.
pub fn decode_name_show_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    ShowName::decode_reply(bytes).map(NameReply::Show)
}

/// Decodes a `name_list` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is an array of records.
pub fn decode_name_list_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    ListNames::decode_reply(bytes).map(NameReply::List)
}

/// Decodes a `name_history` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is an array of records.
pub fn decode_name_history_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    NameHistory::decode_reply(bytes).map(NameReply::History)
}

/// Decodes a `name_scan` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is an array of records.
pub fn decode_name_scan_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    ScanNames::decode_reply(bytes).map(NameReply::Scan)
}

/// Decodes a `name_filter` reply.
///
/// # Errors
///
/// Returns [`CommandError::Decode`] unless the payload is an array of records.
pub fn decode_name_filter_reply(bytes: &[u8]) -> Result<NameReply, CommandError> {
    FilterNames::decode_reply(bytes).map(NameReply::Filter)
}
