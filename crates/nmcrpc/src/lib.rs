//! Namecoin `name_*` JSON-RPC commands.
//!
//! The crate converts the eight name commands between typed values and the
//! positional parameter arrays carried by JSON-RPC requests, decodes their
//! replies, and binds them into a method table a dispatcher consults by name.
//!
//! Every command has a required prefix of parameters and an optional suffix.
//! Decoding checks the array length before reading any position and rejects
//! wrong JSON types with the offending position. Encoding writes the required
//! prefix, then the optional suffix up to the last non-default value, padding
//! any defaults in between so positions stay unambiguous.
//!
//! # Example
//!
//! ```
//! use nmcrpc::registry::name_command_table;
//! use nmcrpc::rpc::RawCommand;
//!
//! let table = name_command_table()?;
//! let raw = RawCommand::from_slice(
//!     br#"{"method":"name_scan","params":["d/a",10],"id":1}"#,
//! )?;
//! let command = table.parse(&raw)?;
//! assert_eq!(command.method(), "name_scan");
//! assert_eq!(command.params().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commands;
pub mod error;
pub mod help;
pub mod params;
pub mod registry;
pub mod replies;
pub mod rpc;

#[cfg(test)]
mod tests;

pub use self::commands::{
    Command, FilterNames, FirstUpdateName, ListNames, NameCommand, NameHistory, NewName,
    ScanNames, ShowName, UpdateName,
};
pub use self::error::{CommandError, DispatchError, RegistryError};
pub use self::params::{Arity, ParamKind};
pub use self::registry::{NAME_METHODS, NameCommandTable, name_command_table, register_name_commands};
pub use self::replies::NameReply;
pub use self::rpc::{RawCommand, Request};
