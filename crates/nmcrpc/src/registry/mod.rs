//! Binds the name commands into a [`CommandTable`].
//!
//! Registration is an explicit, fallible step the host runs once before it
//! serves requests. The first binding that fails aborts the whole step, so a
//! host never runs with a partial set of name commands.

use tracing::debug;

use crate::commands::{
    Command, FilterNames, FirstUpdateName, ListNames, NameCommand, NameHistory, NewName,
    ScanNames, ShowName, UpdateName, parse_command,
};
use crate::error::RegistryError;
use crate::help;
use crate::replies::{
    NameReply, decode_name_filter_reply, decode_name_firstupdate_reply,
    decode_name_history_reply, decode_name_list_reply, decode_name_new_reply,
    decode_name_scan_reply, decode_name_show_reply, decode_name_update_reply,
};
use crate::rpc::{CommandBinding, CommandTable};

const REGISTRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::registry");

/// Command table specialised to the name commands.
pub type NameCommandTable = CommandTable<Command, NameReply>;

/// Method names in registration order.
pub const NAME_METHODS: [&str; 8] = [
    NewName::METHOD,
    UpdateName::METHOD,
    FirstUpdateName::METHOD,
    ShowName::METHOD,
    ListNames::METHOD,
    NameHistory::METHOD,
    ScanNames::METHOD,
    FilterNames::METHOD,
];

const fn bindings() -> [(&'static str, CommandBinding<Command, NameReply>); 8] {
    [
        (
            NewName::METHOD,
            CommandBinding::new(parse_command::<NewName>, decode_name_new_reply, help::NAME_NEW),
        ),
        (
            UpdateName::METHOD,
            CommandBinding::new(
                parse_command::<UpdateName>,
                decode_name_update_reply,
                help::NAME_UPDATE,
            ),
        ),
        (
            FirstUpdateName::METHOD,
            CommandBinding::new(
                parse_command::<FirstUpdateName>,
                decode_name_firstupdate_reply,
                help::NAME_FIRSTUPDATE,
            ),
        ),
        (
            ShowName::METHOD,
            CommandBinding::new(parse_command::<ShowName>, decode_name_show_reply, help::NAME_SHOW),
        ),
        (
            ListNames::METHOD,
            CommandBinding::new(parse_command::<ListNames>, decode_name_list_reply, help::NAME_LIST),
        ),
        (
            NameHistory::METHOD,
            CommandBinding::new(
                parse_command::<NameHistory>,
                decode_name_history_reply,
                help::NAME_HISTORY,
            ),
        ),
        (
            ScanNames::METHOD,
            CommandBinding::new(parse_command::<ScanNames>, decode_name_scan_reply, help::NAME_SCAN),
        ),
        (
            FilterNames::METHOD,
            CommandBinding::new(
                parse_command::<FilterNames>,
                decode_name_filter_reply,
                help::NAME_FILTER,
            ),
        ),
    ]
}

/// Registers every name command in `table`.
///
/// # Errors
///
/// Returns the first [`RegistryError`] raised by the table, typically
/// [`RegistryError::Duplicate`] when a name command is already bound.
/// Bindings made before the failure are left in place.
///
/// # Example
///
/// ```
/// use nmcrpc::registry::{NameCommandTable, register_name_commands};
///
/// let mut table = NameCommandTable::new();
/// register_name_commands(&mut table)?;
/// assert_eq!(table.len(), 8);
/// assert!(register_name_commands(&mut table).is_err());
/// # Ok::<(), nmcrpc::RegistryError>(())
/// ```
pub fn register_name_commands(table: &mut NameCommandTable) -> Result<(), RegistryError> {
    for (method, binding) in bindings() {
        table.register(method, binding)?;
    }
    debug!(
        target: REGISTRY_TARGET,
        commands = NAME_METHODS.len(),
        "registered name commands"
    );
    Ok(())
}

/// Builds a table holding only the name commands.
///
/// # Errors
///
/// Returns [`RegistryError`] if registration fails.
pub fn name_command_table() -> Result<NameCommandTable, RegistryError> {
    let mut table = NameCommandTable::new();
    register_name_commands(&mut table)?;
    Ok(table)
}
