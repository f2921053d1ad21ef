//! The dispatcher: tokenization, registry lookup, verbosity wrapping.

use std::collections::HashMap;

use thiserror::Error;

use crate::commands;
use crate::handler::{CommandContext, Handler};
use crate::outcome::{Outcome, Reply};
use crate::session::{Session, Verbosity};
use crate::source::DataSource;

/// Fixed reply for input whose first token matches no registered command.
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// Errors raised while assembling a dispatcher.
///
/// These are build-time misconfigurations, not runtime conditions - once a
/// dispatcher exists, `process` cannot fail.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The same command name was registered twice.
    #[error("duplicate command: {0}")]
    DuplicateCommand(String),
    /// Command names are single words; whitespace would make the command
    /// unreachable by tokenization.
    #[error("command name contains whitespace: {0:?}")]
    WhitespaceInName(String),
}

/// Builder collecting the command registry before the dispatcher exists.
///
/// The registry is sealed at [`build`](DispatcherBuilder::build): there is
/// no runtime registration or removal.
#[derive(Default)]
pub struct DispatcherBuilder {
    registry: HashMap<String, Box<dyn Handler>>,
}

impl DispatcherBuilder {
    /// Starts an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the four built-in commands:
    /// `load_file`, `view`, `search`, and `mode`.
    pub fn builtins() -> Self {
        let mut registry: HashMap<String, Box<dyn Handler>> = HashMap::new();
        registry.insert("load_file".into(), Box::new(commands::load_file));
        registry.insert("view".into(), Box::new(commands::view));
        registry.insert("search".into(), Box::new(commands::search));
        registry.insert("mode".into(), Box::new(commands::mode));
        Self { registry }
    }

    /// Registers `handler` under `name`.
    ///
    /// Names are matched case-sensitively against the first input token,
    /// so they must be single words.
    pub fn command(
        mut self,
        name: &str,
        handler: impl Handler + 'static,
    ) -> Result<Self, SetupError> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(SetupError::WhitespaceInName(name.to_string()));
        }
        if self.registry.contains_key(name) {
            return Err(SetupError::DuplicateCommand(name.to_string()));
        }
        self.registry.insert(name.to_string(), Box::new(handler));
        Ok(self)
    }

    /// Seals the registry and binds the data-source collaborator.
    pub fn build(self, source: Box<dyn DataSource>) -> Dispatcher {
        Dispatcher {
            registry: self.registry,
            session: Session::new(),
            source,
        }
    }
}

/// Routes input lines to handlers and wraps their outcomes.
///
/// Owns the command registry (immutable after construction) and the
/// [`Session`] the handlers mutate. `process` takes `&mut self`, so the
/// borrow checker enforces the one-command-at-a-time contract; a dispatcher
/// shared across threads needs its own external serialization.
pub struct Dispatcher {
    registry: HashMap<String, Box<dyn Handler>>,
    session: Session,
    source: Box<dyn DataSource>,
}

impl Dispatcher {
    /// Starts building a dispatcher with an empty registry.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// A dispatcher with the four built-in commands registered.
    pub fn with_builtins(source: Box<dyn DataSource>) -> Self {
        DispatcherBuilder::builtins().build(source)
    }

    /// Read access to the session state (tests, status lines).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Maps one input line to a display value.
    ///
    /// Splits the line on whitespace, resolves the first token against the
    /// registry, runs the handler with the remaining tokens, and wraps the
    /// outcome per the session's verbosity. Every line - empty, unknown,
    /// malformed - yields a reply; there is no error path.
    ///
    /// The wrap reads the verbosity after the handler ran: `mode`'s own
    /// confirmation is displayed under the mode it just switched to.
    pub fn process(&mut self, input: &str) -> Reply {
        let mut tokens = input.split_whitespace();
        let outcome = match tokens.next() {
            Some(name) => match self.registry.get(name) {
                Some(handler) => {
                    let args: Vec<String> = tokens.map(String::from).collect();
                    let mut ctx = CommandContext {
                        session: &mut self.session,
                        source: self.source.as_ref(),
                    };
                    handler.handle(&mut ctx, &args)
                }
                None => Outcome::message(UNKNOWN_COMMAND),
            },
            None => Outcome::message(UNKNOWN_COMMAND),
        };

        match self.session.verbosity {
            Verbosity::Brief => Reply::Brief { outcome },
            Verbosity::Verbose => Reply::Verbose {
                command: input.to_string(),
                outcome,
            },
        }
    }
}
