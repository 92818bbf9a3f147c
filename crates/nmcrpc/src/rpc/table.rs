//! Method table consulted by the dispatcher.
//!
//! The table stores one [`CommandBinding`] per method name. Registering the
//! same name twice is rejected rather than overwritten, so a host that
//! registers its commands at startup learns about collisions immediately.

use std::collections::BTreeMap;

use tracing::debug;

use super::{RPC_TARGET, RawCommand};
use crate::error::{CommandError, DispatchError, RegistryError};

/// Converts a raw request into a typed command.
pub type CommandParser<C> = fn(&RawCommand) -> Result<C, CommandError>;

/// Converts raw reply bytes into a typed result.
pub type ReplyDecoder<R> = fn(&[u8]) -> Result<R, CommandError>;

/// Parser, reply decoder, and help text bound to a method name.
#[derive(Debug, Clone)]
pub struct CommandBinding<C, R> {
    parser: CommandParser<C>,
    reply_decoder: ReplyDecoder<R>,
    help: &'static str,
}

impl<C, R> CommandBinding<C, R> {
    /// Creates a binding.
    #[must_use]
    pub const fn new(
        parser: CommandParser<C>,
        reply_decoder: ReplyDecoder<R>,
        help: &'static str,
    ) -> Self {
        Self {
            parser,
            reply_decoder,
            help,
        }
    }

    /// Returns the bound parser.
    #[must_use]
    pub const fn parser(&self) -> CommandParser<C> {
        self.parser
    }

    /// Returns the bound reply decoder.
    #[must_use]
    pub const fn reply_decoder(&self) -> ReplyDecoder<R> {
        self.reply_decoder
    }

    /// Returns the help text.
    #[must_use]
    pub const fn help(&self) -> &'static str {
        self.help
    }
}

/// Table mapping method names to command bindings.
///
/// # Example
///
/// ```
/// use nmcrpc::rpc::{CommandBinding, CommandTable, RawCommand};
/// use nmcrpc::CommandError;
///
/// fn parse(raw: &RawCommand) -> Result<String, CommandError> {
///     Ok(raw.method().to_owned())
/// }
///
/// fn decode(bytes: &[u8]) -> Result<usize, CommandError> {
///     Ok(bytes.len())
/// }
///
/// let mut table = CommandTable::new();
/// table.register("ping", CommandBinding::new(parse, decode, "ping\nCheck liveness"))?;
/// assert!(table.contains("ping"));
/// assert!(table.register("ping", CommandBinding::new(parse, decode, "")).is_err());
/// # Ok::<(), nmcrpc::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CommandTable<C, R> {
    bindings: BTreeMap<String, CommandBinding<C, R>>,
}

impl<C, R> Default for CommandTable<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> CommandTable<C, R> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Binds `name` to `binding`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] for a blank name and
    /// [`RegistryError::Duplicate`] if the name is already bound.
    pub fn register(
        &mut self,
        name: &str,
        binding: CommandBinding<C, R>,
    ) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidName);
        }
        if self.bindings.contains_key(name) {
            return Err(RegistryError::Duplicate {
                name: name.to_owned(),
            });
        }
        self.bindings.insert(name.to_owned(), binding);
        debug!(target: RPC_TARGET, method = name, "registered command");
        Ok(())
    }

    /// Returns the binding for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandBinding<C, R>> {
        self.bindings.get(name)
    }

    /// Parses `raw` with the parser bound to its method.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownMethod`] when no parser is bound, or
    /// the parser's [`CommandError`].
    pub fn parse(&self, raw: &RawCommand) -> Result<C, DispatchError> {
        let binding = self.lookup(raw.method())?;
        debug!(
            target: RPC_TARGET,
            method = raw.method(),
            params = raw.params().len(),
            "parsing command"
        );
        (binding.parser)(raw).map_err(DispatchError::from)
    }

    /// Decodes reply bytes with the decoder bound to `method`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownMethod`] when no decoder is bound, or
    /// the decoder's [`CommandError`].
    pub fn decode_reply(&self, method: &str, reply: &[u8]) -> Result<R, DispatchError> {
        let binding = self.lookup(method)?;
        debug!(target: RPC_TARGET, method, bytes = reply.len(), "decoding reply");
        (binding.reply_decoder)(reply).map_err(DispatchError::from)
    }

    /// Returns the help text bound to `method`.
    #[must_use]
    pub fn help(&self, method: &str) -> Option<&'static str> {
        self.bindings.get(method).map(CommandBinding::help)
    }

    /// Returns `true` when `method` is bound.
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.bindings.contains_key(method)
    }

    /// Returns the bound method names in lexical order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Returns the number of bound methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn lookup(&self, method: &str) -> Result<&CommandBinding<C, R>, RegistryError> {
        self.bindings
            .get(method)
            .ok_or_else(|| RegistryError::UnknownMethod {
                name: method.to_owned(),
            })
    }
}
